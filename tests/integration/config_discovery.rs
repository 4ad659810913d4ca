use anyhow::Result;
use serde_json::Value;

use crate::common::{stderr_of, stdout_of, Sandbox};

fn listed_config_path(stdout: &str) -> Option<String> {
    let json: Value = serde_json::from_str(stdout).ok()?;
    json.get("config_path")?.as_str().map(str::to_string)
}

#[test]
fn cwd_dotfile_wins_over_home_and_xdg() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(&sandbox.xdg().join("supernova"), "[xdg]\nos_username=x\n")?;
    sandbox.write_config(&sandbox.home().join(".supernova"), "[home]\nos_username=h\n")?;
    sandbox.write_config(&sandbox.cwd().join(".supernova"), "[cwd]\nos_username=c\n")?;

    let output = sandbox.run(&["cwd", "list"], &[])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("OS_USERNAME=c\n"));

    let output = sandbox.run(&["home", "list"], &[])?;
    assert_eq!(output.status.code(), Some(1), "home file must be shadowed");
    Ok(())
}

#[test]
fn home_dotfile_wins_over_xdg() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(&sandbox.xdg().join("supernova"), "[xdg]\nos_username=x\n")?;
    sandbox.write_config(&sandbox.home().join(".supernova"), "[home]\nos_username=h\n")?;

    let output = sandbox.run(&["home", "list"], &[])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("OS_USERNAME=h\n"));
    Ok(())
}

#[test]
fn xdg_file_is_used_when_alone() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let path = sandbox.write_config(&sandbox.xdg().join("supernova"), "[xdg]\nos_username=x\n")?;

    let output = sandbox.run(&["--list"], &[])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(
        listed_config_path(&stdout_of(&output)),
        Some(path.display().to_string())
    );
    Ok(())
}

#[test]
fn config_override_replaces_default_candidates() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(&sandbox.cwd().join(".supernova"), "[cwd]\nos_username=c\n")?;
    let first = sandbox.write_config(&sandbox.home().join("first.ini"), "[first]\n")?;
    let second = sandbox.write_config(&sandbox.home().join("second.ini"), "[second]\n")?;

    let first_arg = first.display().to_string();
    let second_arg = second.display().to_string();
    let output = sandbox.run(&["-c", &first_arg, "-c", &second_arg, "--list"], &[])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(listed_config_path(&stdout_of(&output)), Some(second_arg));
    Ok(())
}

#[test]
fn missing_config_is_fatal() -> Result<()> {
    let sandbox = Sandbox::new()?;

    let output = sandbox.run(&["staging", "list"], &[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("Couldn't find a valid configuration file"));
    Ok(())
}

#[test]
fn list_does_not_warn_about_insecure() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(
        &sandbox.cwd().join(".supernova"),
        "[legacy]\nnova_username=carol\ninsecure=true\n",
    )?;

    let output = sandbox.run(&["--list"], &[])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("NOVA_USERNAME"));
    assert!(!stderr_of(&output).contains("insecure"), "stderr: {}", stderr_of(&output));
    Ok(())
}
