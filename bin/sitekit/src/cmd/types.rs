//! Types command - list every block type tag

use sitekit_core::BlockType;

/// Run the types command.
pub fn run() {
    for line in lines() {
        println!("{line}");
    }
}

fn lines() -> Vec<&'static str> {
    BlockType::ALL.iter().map(BlockType::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_tag() {
        let lines = lines();
        assert_eq!(lines.len(), BlockType::ALL.len());
        assert_eq!(lines.first(), Some(&"block_columns"));
        assert!(lines.contains(&"block_custom_hero_2"));
    }
}
