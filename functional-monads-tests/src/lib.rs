pub mod arb;
pub mod laws;

#[cfg(test)]
mod either;
