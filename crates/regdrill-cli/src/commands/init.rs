//! The `regdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("regdrill.toml").exists() {
        println!("regdrill.toml already exists, skipping.");
    } else {
        std::fs::write("regdrill.toml", SAMPLE_CONFIG)?;
        println!("Created regdrill.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit regdrill.toml to choose where your level is kept");
    println!("  2. Run: regdrill preview --level 0");
    println!("  3. Run: regdrill play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# regdrill configuration

# File holding the next level to attempt. ${VAR} references are expanded.
level_file = "${HOME}/.local/share/regdrill/level.txt"

# Uncomment for reproducible trials.
# seed = 42

confirm_prompt = "Continue (y/n): "
"#;
