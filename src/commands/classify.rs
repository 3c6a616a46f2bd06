use crate::classify::classify;
use anyhow::Result;

pub fn run(value: i64) -> Result<()> {
    println!("{}", classify(value));
    Ok(())
}
