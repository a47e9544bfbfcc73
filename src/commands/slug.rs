use anyhow::Result;

pub fn run(text: &str) -> Result<()> {
    println!("{}", unsent_stars::slug::require(text)?);
    Ok(())
}
