#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub fn demo_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demo")
}

pub fn demo_config() -> PathBuf {
    demo_dir().join("bookrec.yaml")
}

/// Writes a registry with a single mode whose model can never produce a
/// finite score for the query "a a b b".
pub fn write_overflowing_config(dir: &Path) -> anyhow::Result<PathBuf> {
    let model = serde_json::json!({
        "vectorizer": {
            "lowercase": false,
            "stop_words": false,
            "vocabulary": {"a": 0, "b": 1}
        },
        "classes": ["Dune"],
        "coef": [[1e308, -1e308]],
        "intercept": [0.0]
    });
    fs::write(dir.join("overflow.json"), serde_json::to_string(&model)?)?;
    fs::copy(demo_dir().join("data/books.csv"), dir.join("books.csv"))?;

    let config_path = dir.join("bookrec.yaml");
    fs::write(
        &config_path,
        concat!(
            "recommenders:\n",
            "  - mode: broken\n",
            "    label: Broken\n",
            "    prompt: \"Describe a book: \"\n",
            "    model: overflow.json\n",
            "    catalog: books.csv\n",
        ),
    )?;
    Ok(config_path)
}

/// Copies the demo registry into `dir` and overwrites the `overall` model with
/// bytes that do not parse.
pub fn write_demo_with_corrupt_overall(dir: &Path) -> anyhow::Result<PathBuf> {
    let demo = demo_dir();
    fs::create_dir_all(dir.join("models"))?;
    fs::create_dir_all(dir.join("data"))?;
    fs::copy(demo.join("bookrec.yaml"), dir.join("bookrec.yaml"))?;
    fs::copy(demo.join("data/books.csv"), dir.join("data/books.csv"))?;
    fs::copy(
        demo.join("models/fiction.json"),
        dir.join("models/fiction.json"),
    )?;
    fs::write(dir.join("models/overall.json"), "{corrupt")?;
    Ok(dir.join("bookrec.yaml"))
}
