//! Test harness for the e.cfg parser against fixture files.
//!
//! This test harness reads all .cfg files from the test/cfg/ directory,
//! parses them, and compares each rendering against the expected files in
//! test/text/ (falling back to the input itself), test/json/ and test/xml/.
//! It also reads .bad files from test/bad/ (expected to fail) and verifies
//! they produce the error messages in the corresponding .error files.

use std::fs;
use std::path::{Path, PathBuf};

use libecfg::{encode, parse_with_filename, Format, Struct};

/// Root test directory.
fn test_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("test")
}

/// Get all files matching `*.{ext}` in a subdirectory of test/.
fn get_files_in_subdir(subdir: &str, ext: &str) -> Vec<PathBuf> {
    let pattern = test_root().join(subdir).join(format!("*.{}", ext));
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .expect("valid glob pattern")
        .flatten()
        .collect();
    files.sort();
    files
}

fn file_stem(path: &Path) -> String {
    path.file_stem().unwrap().to_string_lossy().to_string()
}

/// Read an expected output file for a fixture, if there is one.
fn read_expected(subdir: &str, stem: &str, ext: &str) -> Option<String> {
    let path = test_root().join(subdir).join(format!("{}.{}", stem, ext));
    fs::read_to_string(path).ok()
}

/// Run a single .cfg fixture (expected to succeed).
fn run_cfg_test(path: &Path) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let stem = file_stem(path);
    let filename = format!("{}.cfg", stem);

    let root = parse_with_filename(&content, Some(&filename))
        .map_err(|e| format!("{}: Unexpected parse error: {}", filename, e))?;

    let expected_text = read_expected("text", &stem, "cfg").unwrap_or_else(|| content.clone());
    check_output(&filename, "text", expected_text.trim(), &encode(&root, Format::Text))?;

    if let Some(expected) = read_expected("json", &stem, "json") {
        check_output(&filename, "json", expected.trim(), &encode(&root, Format::Json))?;
    }
    if let Some(expected) = read_expected("xml", &stem, "xml") {
        check_output(&filename, "xml", expected.trim(), &encode(&root, Format::Xml))?;
    }

    check_fixed_point(&filename, &root)?;
    println!("  {} => {}", filename, root);
    Ok(())
}

fn check_output(filename: &str, kind: &str, expected: &str, actual: &str) -> Result<(), String> {
    if expected != actual {
        return Err(format!(
            "{}: {} output mismatch\n--- expected\n{}\n--- actual\n{}",
            filename, kind, expected, actual
        ));
    }
    Ok(())
}

/// Rendered text must parse back to the same tree and render identically.
fn check_fixed_point(filename: &str, root: &Struct) -> Result<(), String> {
    let text = root.text();
    let reparsed = libecfg::parse(&text)
        .map_err(|e| format!("{}: Rendered text does not parse: {}", filename, e))?;
    if &reparsed != root {
        return Err(format!("{}: Tree changed after re-parse", filename));
    }
    if reparsed.text() != text {
        return Err(format!("{}: Text is not a fixed point", filename));
    }
    Ok(())
}

/// Run a single .bad fixture (expected to fail with a specific error).
fn run_bad_test(path: &Path) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let stem = file_stem(path);
    let filename = format!("{}.bad", stem);

    match parse_with_filename(&content, Some(&filename)) {
        Ok(root) => Err(format!(
            "{}: Expected parse error, but got success: {}",
            filename, root
        )),
        Err(e) => {
            let actual = e.to_string();
            match read_expected("bad", &stem, "error") {
                Some(expected) if expected.trim() != actual => Err(format!(
                    "{}: Error mismatch\n    expected: {}\n    actual:   {}",
                    filename,
                    expected.trim(),
                    actual
                )),
                _ => {
                    println!("  {} => {}", filename, actual);
                    Ok(())
                }
            }
        }
    }
}

fn run_all(files: &[PathBuf], run: fn(&Path) -> Result<(), String>) {
    let failures: Vec<String> = files.iter().filter_map(|f| run(f).err()).collect();
    if !failures.is_empty() {
        panic!(
            "{} of {} fixtures failed:\n{}",
            failures.len(),
            files.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_cfg_fixtures() {
    let files = get_files_in_subdir("cfg", "cfg");
    assert!(!files.is_empty(), "no .cfg fixtures found");
    run_all(&files, run_cfg_test);
}

#[test]
fn test_bad_fixtures() {
    let files = get_files_in_subdir("bad", "bad");
    assert!(!files.is_empty(), "no .bad fixtures found");
    run_all(&files, run_bad_test);
}

#[test]
fn test_sample_values() {
    let content = fs::read_to_string(test_root().join("cfg").join("sample.cfg")).unwrap();
    let root = libecfg::parse(&content).unwrap();

    assert_eq!(
        root.to_string(),
        "Struct(name=\"Root_Struct\", lists=[1], values=[1])"
    );
    assert_eq!(
        root.lists[0].to_string(),
        "List(name=\"List_A\", items=[2], values=[1])"
    );
    assert_eq!(
        root.values[0].to_string(),
        "Value(name=\"struct_value\", type=string, data=\"struct_value\")"
    );

    let item = &root.lists[0].items[0];
    let names: Vec<&str> = item.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "name_string",
            "name_int",
            "name_uint",
            "name_uchar",
            "name_float",
            "name_double"
        ]
    );
    for v in &item.values {
        assert!(v.decoded().is_ok(), "{} failed to decode", v);
    }

    let quoted = root.lists[0].items[1].value("quoted").unwrap();
    assert_eq!(quoted.data, "say \"hi\" & <bye>");
}
