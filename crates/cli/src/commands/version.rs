use anyhow::Result;
use pants_ide_core::compare_versions;
use std::cmp::Ordering;

pub fn version_compare_command(left: &str, right: &str) -> Result<()> {
    let sign = match compare_versions(left, right)? {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    println!("{sign}");
    Ok(())
}
