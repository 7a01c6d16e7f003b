//! Integration tests for fx-lib
//!
//! These tests go through the public API only. Filesystem tests build
//! temporary directory trees to check on-disk measurement end to end.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use fx_lib::config::{FileConfig, SizeStyle};
use fx_lib::output::{JsonOutput, chunk_lines, path_entries, pipe_lines, size_entries};
use fx_lib::transform::Transform;
use fx_lib::{Error, Pipeline, chunk_iter, chunks, convert_size, parse_size, pipe, try_pipe};

/// Helper function to create a file of `len` bytes
fn create_file(path: &Path, len: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, vec![b'x'; len]).expect("Failed to write file");
}

/// Create a small project-like tree totalling exactly 1.5 KiB
fn create_tree(base: &Path) -> PathBuf {
    let root = base.join("project");
    create_file(&root.join("README.md"), 512);
    create_file(&root.join("src").join("main.rs"), 256);
    create_file(&root.join("src").join("nested").join("lib.rs"), 768);
    fs::create_dir_all(root.join("empty")).expect("Failed to create directory");
    root
}

#[test]
fn test_pipe_identity_for_any_value() {
    let none: Vec<fn(Vec<i32>) -> Vec<i32>> = Vec::new();
    assert_eq!(pipe(vec![3, 1, 2], none), vec![3, 1, 2]);

    let none: Vec<fn(&str) -> &str> = Vec::new();
    assert_eq!(pipe("text", none), "text");
}

#[test]
fn test_pipe_is_nested_application() {
    let f1 = |v: Vec<i32>| v.into_iter().map(|x| x * 2).collect::<Vec<_>>();
    let f2 = |mut v: Vec<i32>| {
        v.sort_unstable();
        v
    };
    let f3 = |mut v: Vec<i32>| {
        v.push(0);
        v
    };
    let funcs: [&dyn Fn(Vec<i32>) -> Vec<i32>; 3] = [&f1, &f2, &f3];

    assert_eq!(pipe(vec![3, 1, 2], funcs), f3(f2(f1(vec![3, 1, 2]))));
    assert_eq!(pipe(vec![3, 1, 2], funcs), vec![2, 4, 6, 0]);
}

#[test]
fn test_try_pipe_propagates_caller_error_type() {
    let parse = |s: String| s.trim().parse::<i64>().map(|n| n.to_string());
    let funcs: [&dyn Fn(String) -> Result<String, std::num::ParseIntError>; 1] = [&parse];

    assert_eq!(try_pipe(" 42 ".to_string(), funcs).unwrap(), "42");
    assert!(try_pipe("forty-two".to_string(), funcs).is_err());
}

#[test]
fn test_pipe_macro_from_outside_the_crate() {
    let words = fx_lib::pipe!(
        "the quick brown fox",
        str::split_whitespace,
        Iterator::count
    );
    assert_eq!(words, 4);
}

#[test]
fn test_pipeline_shared_across_threads() {
    let pipeline = Pipeline::new()
        .then(|s: String| s.trim().to_string())
        .then(|s: String| s.to_uppercase());

    let pipeline = &pipeline;
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["  a ", " b", "c  "]
            .into_iter()
            .map(|input| scope.spawn(move || pipeline.apply(input.to_string())))
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results, vec!["A", "B", "C"]);
    });
}

#[test]
fn test_convert_size_reference_values() {
    assert_eq!(convert_size(0).unwrap(), "0B");
    assert_eq!(convert_size(1024).unwrap(), "1.0KB");
    assert_eq!(convert_size(1536).unwrap(), "1.5KB");
    assert_eq!(convert_size(1_048_576).unwrap(), "1.0MB");
    assert_eq!(convert_size(5_368_709_121_u64).unwrap(), "5.0GB");
}

#[test]
fn test_convert_size_errors() {
    assert_eq!(convert_size(-1024).unwrap_err(), Error::NegativeSize(-1024));
    assert!(matches!(
        convert_size(1024_i128.pow(9) * 3),
        Err(Error::SizeTooLarge(_))
    ));
}

#[test]
fn test_parse_size_accepts_convert_size_output() {
    for bytes in [0_u64, 1024, 1536, 1_048_576, 3 << 30] {
        let formatted = convert_size(bytes).unwrap();
        assert_eq!(parse_size(&formatted).unwrap(), bytes, "{formatted}");
    }
}

#[test]
fn test_chunks_reference_example() {
    let parts: Vec<Vec<i32>> = chunks(&[1, 2, 3, 4, 5], 2)
        .unwrap()
        .map(<[i32]>::to_vec)
        .collect();

    assert_eq!(parts, vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[test]
fn test_chunks_of_strings_reassemble() {
    let words: Vec<String> = "a b c d e f g h i j k".split(' ').map(String::from).collect();

    for size in 1..=12 {
        let parts: Vec<&[String]> = chunks(&words, size).unwrap().collect();

        assert_eq!(parts.len(), words.len().div_ceil(size));
        assert_eq!(parts.concat(), words);
    }
}

#[test]
fn test_chunk_iter_over_range() {
    let parts: Vec<Vec<u32>> = chunk_iter(1..=7, 3).unwrap().collect();
    assert_eq!(parts, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
}

#[test]
fn test_chunk_size_zero_rejected_everywhere() {
    assert_eq!(chunks(&[1], 0).unwrap_err(), Error::InvalidChunkSize);
    assert!(chunk_iter(0..3, 0).is_err());
    assert!(chunk_lines(Cursor::new("x\n"), 0).is_err());
}

#[test]
fn test_du_on_directory_tree() {
    let tmp = TempDir::new().expect("Failed to create temporary directory");
    let root = create_tree(tmp.path());

    let entries = path_entries(&[root.clone()], SizeStyle::Compact).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, root);
    assert_eq!(entries[0].bytes, 1536);
    assert_eq!(entries[0].formatted, "1.5KB");
}

#[test]
fn test_du_multiple_paths_with_styles() {
    let tmp = TempDir::new().expect("Failed to create temporary directory");
    let root = create_tree(tmp.path());
    let single = tmp.path().join("single.bin");
    create_file(&single, 1_000_000);

    let entries = path_entries(&[single, root.join("src")], SizeStyle::Decimal).unwrap();

    assert_eq!(entries[0].bytes, 1_000_000);
    assert_eq!(entries[0].formatted, "1 MB");
    assert_eq!(entries[1].bytes, 1024);
}

#[test]
fn test_du_missing_path_fails() {
    let tmp = TempDir::new().expect("Failed to create temporary directory");
    assert!(path_entries(&[tmp.path().join("ghost")], SizeStyle::Compact).is_err());
}

#[test]
fn test_size_entries_json_document() {
    let inputs = ["1536".to_string(), "2KB".to_string()];
    let entries = size_entries(&inputs, SizeStyle::Compact).unwrap();
    let json = serde_json::to_value(JsonOutput::Size { entries }).unwrap();

    assert_eq!(json["command"], "size");
    assert_eq!(json["entries"][0]["formatted"], "1.5KB");
    assert_eq!(json["entries"][1]["bytes"], 2048);
}

#[test]
fn test_chunk_lines_from_file() {
    let tmp = TempDir::new().expect("Failed to create temporary directory");
    let path = tmp.path().join("lines.txt");
    fs::write(&path, "1\n2\n3\n4\n").unwrap();

    let reader = std::io::BufReader::new(fs::File::open(&path).unwrap());
    let parts = chunk_lines(reader, 3).unwrap();

    assert_eq!(parts, vec![vec!["1", "2", "3"], vec!["4"]]);
}

#[test]
fn test_pipe_lines_with_config_transforms() {
    let tmp = TempDir::new().expect("Failed to create temporary directory");
    let config_path = tmp.path().join("config.toml");
    fs::write(&config_path, "[pipe]\ntransforms = [\"squash\", \"trim\", \"upper\"]\n").unwrap();

    let config = FileConfig::load_from(&config_path).unwrap();
    let transforms = config.pipe.transforms.unwrap();
    assert_eq!(
        transforms,
        vec![Transform::Squash, Transform::Trim, Transform::Upper]
    );

    let lines = pipe_lines(Cursor::new("  hello    world \n"), &transforms).unwrap();
    assert_eq!(lines, vec!["HELLO WORLD"]);
}
