use anyhow::Result;

use crate::common::{stderr_of, stdout_of, Sandbox};

const STAGING_CONFIG: &str = "[staging]\nos_username=bob\nos_password=pw1\nregion=east\n";

#[test]
fn staging_credentials_reach_the_client() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(&sandbox.cwd().join(".supernova"), STAGING_CONFIG)?;

    let output = sandbox.run(&["staging", "list"], &[])?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout.contains("args:list\n"), "stdout: {stdout}");
    assert!(stdout.contains("OS_USERNAME=bob\n"), "stdout: {stdout}");
    assert!(stdout.contains("OS_PASSWORD=pw1\n"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn child_exit_status_is_mirrored() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(&sandbox.cwd().join(".supernova"), STAGING_CONFIG)?;

    let output = sandbox.run(&["staging", "show", "vm-1"], &[("FAKE_NOVA_EXIT", "3")])?;

    assert_eq!(output.status.code(), Some(3), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("args:show vm-1\n"));
    Ok(())
}

#[test]
fn client_stderr_is_folded_into_stdout() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(&sandbox.cwd().join(".supernova"), STAGING_CONFIG)?;

    let output = sandbox.run(&["staging", "list"], &[])?;

    assert!(stdout_of(&output).contains("from-stderr\n"));
    assert!(!stderr_of(&output).contains("from-stderr"));
    Ok(())
}

#[test]
fn credentials_override_shell_presets() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(&sandbox.cwd().join(".supernova"), STAGING_CONFIG)?;

    let output = sandbox.run(&["staging", "list"], &[("OS_USERNAME", "shell-user")])?;

    assert!(stdout_of(&output).contains("OS_USERNAME=bob\n"));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("may cause conflicts") && stderr.contains("OS_USERNAME"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn insecure_option_warns_but_still_runs() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(
        &sandbox.cwd().join(".supernova"),
        "[legacy]\nnova_username=carol\ninsecure=true\n",
    )?;

    let output = sandbox.run(&["legacy", "list"], &[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("NOVA_USERNAME=carol\n"));
    assert!(stderr_of(&output).contains("'insecure' option is deprecated"));
    Ok(())
}

#[test]
fn unknown_environment_fails_without_spawning() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(&sandbox.cwd().join(".supernova"), STAGING_CONFIG)?;

    let output = sandbox.run(&["production", "list"], &[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("Environment `production` is not defined"));
    Ok(())
}

#[test]
fn missing_executable_is_reported() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(&sandbox.cwd().join(".supernova"), STAGING_CONFIG)?;

    let output = sandbox.run(&["-x", "no-such-client", "staging", "list"], &[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("Failed to start `no-such-client`"),
        "stderr: {}",
        stderr_of(&output)
    );
    Ok(())
}

#[test]
fn values_are_exported_as_written() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.write_config(
        &sandbox.cwd().join(".supernova"),
        "[rax.prod]\nos_username=o'brien\nos_password=pa\\ss\n",
    )?;

    let output = sandbox.run(&["rax.prod", "list"], &[])?;
    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout.contains("OS_USERNAME=o'brien\n"), "stdout: {stdout}");
    assert!(stdout.contains("OS_PASSWORD=pa\\ss\n"), "stdout: {stdout}");

    let output = sandbox.run(&["rax", "list"], &[])?;
    assert_eq!(output.status.code(), Some(1), "dotted name is one section");
    Ok(())
}
