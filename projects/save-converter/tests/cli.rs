use errors::AnyResult;
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn save_converter<I, S>(args: I) -> AnyResult<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Ok(Command::new(env!("CARGO_BIN_EXE_save-converter"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()?)
}

fn fresh_path(tmp_file: &temp_file::TempFile) -> PathBuf {
    tmp_file.path().with_extension("out.sav")
}

fn paths<'a>(input: &'a Path, output: &'a Path) -> [&'a Path; 2] {
    [input, output]
}

#[test]
fn test_convert_prints_done() -> AnyResult<()> {
    let tmp_file = temp_file::with_contents(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
    let output = fresh_path(&tmp_file);

    let res = save_converter(paths(tmp_file.path(), &output))?;

    assert_eq!(Some(0), res.status.code());
    assert!(String::from_utf8_lossy(&res.stdout).contains("Done."));
    assert_eq!(
        vec![7, 6, 5, 4, 3, 2, 1, 0, 15, 14, 13, 12, 11, 10, 9, 8],
        fs::read(&output)?
    );

    fs::remove_file(&output)?;
    Ok(())
}

#[test]
fn test_wrong_argument_count() -> AnyResult<()> {
    let res = save_converter(["only-one.sav"])?;

    assert_eq!(Some(2), res.status.code());
    assert!(String::from_utf8_lossy(&res.stderr).contains("USAGE"));
    Ok(())
}

#[test]
fn test_missing_input() -> AnyResult<()> {
    let tmp_file = temp_file::empty();
    let input = tmp_file.path().with_extension("missing.sav");
    let output = fresh_path(&tmp_file);

    let res = save_converter(paths(&input, &output))?;
    let stderr = String::from_utf8_lossy(&res.stderr);

    assert_eq!(Some(3), res.status.code());
    assert!(stderr.contains("Input file doesn't exist!"));
    assert!(stderr.contains("USAGE"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_existing_output_untouched() -> AnyResult<()> {
    let tmp_file = temp_file::with_contents(&[0; 8]);
    let existing = temp_file::with_contents(b"keep me!");

    let res = save_converter(paths(tmp_file.path(), existing.path()))?;
    let stderr = String::from_utf8_lossy(&res.stderr);

    assert_eq!(Some(4), res.status.code());
    assert!(stderr.contains("Output file already exists!"));
    assert!(stderr.contains("USAGE"));
    assert_eq!(b"keep me!".to_vec(), fs::read(existing.path())?);
    Ok(())
}

#[test]
fn test_length_mismatch() -> AnyResult<()> {
    let tmp_file = temp_file::with_contents(&[0; 7]);
    let output = fresh_path(&tmp_file);

    let res = save_converter(paths(tmp_file.path(), &output))?;

    assert_eq!(Some(5), res.status.code());
    assert!(String::from_utf8_lossy(&res.stderr)
        .contains("Input file's length needs to be a multiple of 8 bytes!"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_check_only() -> AnyResult<()> {
    let tmp_file = temp_file::with_contents(&[0; 32]);

    let res = save_converter([tmp_file.path().as_os_str(), "--check".as_ref()])?;

    assert_eq!(Some(0), res.status.code());
    assert!(String::from_utf8_lossy(&res.stdout).contains("4 chunks of 8 bytes"));
    Ok(())
}

#[test]
fn test_verbose_summary() -> AnyResult<()> {
    let tmp_file = temp_file::with_contents(&[0; 24]);
    let output = fresh_path(&tmp_file);

    let res = save_converter([tmp_file.path().as_os_str(), output.as_os_str(), "-v".as_ref()])?;
    let stdout = String::from_utf8_lossy(&res.stdout);

    assert_eq!(Some(0), res.status.code());
    assert!(stdout.contains("24 bytes, 3 chunks of 8 bytes reversed"));
    assert!(stdout.contains("Done."));

    fs::remove_file(&output)?;
    Ok(())
}
