use anyhow::{Context, Result};
use modelgen_core::render_to_string;

use super::InputArgs;

pub fn cmd_render(inputs: InputArgs) -> Result<()> {
    let config = inputs.resolve(None, None)?;
    let output = render_to_string(&config)
        .with_context(|| format!("render {}", config.template_path().display()))?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::CwdGuard;
    use modelgen_config::CONFIG_FILE_NAME;
    use serial_test::serial;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn render_does_not_write_output() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        fs::write("tables.yml", "tables: [{name: users}]\n").unwrap();
        fs::write("models.py.jinja", "{{ tables | length }}").unwrap();
        fs::write(
            CONFIG_FILE_NAME,
            r#"{"schemaPath": "tables.yml", "templatePath": "models.py.jinja", "outputPath": "models.py"}"#,
        )
        .unwrap();

        cmd_render(InputArgs::default()).unwrap();
        assert!(!PathBuf::from("models.py").exists());
    }

    #[test]
    #[serial]
    fn render_reports_template_errors() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        fs::write("tables.yml", "tables: []\n").unwrap();
        fs::write("models.py.jinja", "{{ unclosed").unwrap();

        let inputs = InputArgs {
            schema: Some(PathBuf::from("tables.yml")),
            template: Some(PathBuf::from("models.py.jinja")),
            ..Default::default()
        };
        let err = cmd_render(inputs).unwrap_err();
        assert!(format!("{err:#}").contains("template syntax error"));
    }
}
