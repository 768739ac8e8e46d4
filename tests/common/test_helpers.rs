use std::path::PathBuf;

use tempfile::TempDir;

use person_pipeline::{FormattedPerson, RawPerson};

/// Valid raw record with a compound last name
pub fn joao_da_silva() -> RawPerson {
    RawPerson::new("Joao da Silva", "123.456.789-00")
}

/// `joao_da_silva` after formatting
pub fn joao_da_silva_formatted() -> FormattedPerson {
    FormattedPerson::new("Joao", "da Silva", "12345678900")
}

/// Raw records paired with the error message validation must produce
pub fn invalid_records() -> Vec<(RawPerson, &'static str)> {
    vec![
        (RawPerson::new("", "123.213.541-12"), "name is required"),
        (
            RawPerson {
                name: None,
                cpf: Some("123.213.541-12".to_string()),
            },
            "name is required",
        ),
        (RawPerson::default(), "name is required"),
        (RawPerson::new("Joao", ""), "cpf is required"),
        (
            RawPerson {
                name: Some("Joao".to_string()),
                cpf: None,
            },
            "cpf is required",
        ),
    ]
}

/// Write `content` to `name` inside a fresh temporary directory
pub fn write_temp_file(name: &str, content: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok((temp_dir, path))
}
