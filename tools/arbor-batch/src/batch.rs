use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use arbor_pipeline::Pipeline;
use arbor_surface::Realizer;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Realized {
    pub source: PathBuf,
    pub target: PathBuf,
    pub sentence: String,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub realized: Vec<Realized>,
    pub failed: Vec<(PathBuf, anyhow::Error)>,
}

/// Every `*.json` file directly inside `input`, by file name.
pub fn discover(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut trees = Vec::new();
    for entry in fs::read_dir(input).with_context(|| format!("reading {:?}", input))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            trees.push(path);
        }
    }
    trees.sort();
    Ok(trees)
}

/// Realizes each tree in `input` and writes `<prefix><n>.txt` files to `output`.
///
/// `n` numbers realized sentences. A tree that fails to realize, or whose
/// file cannot be written, is logged and skipped. Only the directories
/// themselves abort the run.
pub fn run<R: Realizer>(
    pipeline: &Pipeline<R>,
    input: &Path,
    output: &Path,
    prefix: &str,
) -> anyhow::Result<BatchReport> {
    let trees = discover(input)?;
    fs::create_dir_all(output).with_context(|| format!("creating {:?}", output))?;
    info!(trees = trees.len(), "realizing parse trees from {:?}", input);

    let mut report = BatchReport::default();
    let mut index = 0;
    for source in trees {
        let sentence = match realize_file(pipeline, &source) {
            Ok(sentence) => sentence,
            Err(e) => {
                warn!("skipping {:?}: {:#}", source, e);
                report.failed.push((source, e));
                continue;
            }
        };

        let target = output.join(format!("{}{}.txt", prefix, index));
        index += 1;

        if let Err(e) = fs::write(&target, &sentence).with_context(|| format!("writing {:?}", target)) {
            warn!("skipping {:?}: {:#}", source, e);
            report.failed.push((source, e));
            continue;
        }

        report.realized.push(Realized {
            source,
            target,
            sentence,
        });
    }

    info!(
        realized = report.realized.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}

fn realize_file<R: Realizer>(pipeline: &Pipeline<R>, source: &Path) -> anyhow::Result<String> {
    let document = fs::read_to_string(source)?;
    Ok(pipeline.build_sentence(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("arbor-batch-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_bad_tree_does_not_stop_batch() {
        let dir = scratch("isolation");
        let input = dir.join("trees");
        let output = dir.join("out");
        fs::create_dir_all(&input).unwrap();

        fs::write(
            input.join("a.json"),
            r#"{"a": "1", "b": "clause", "d": "{'tense': 'pres'}", "children": [
                {"a": "2", "b": "subj", "c": "io"},
                {"a": "3", "b": "verb", "c": "essere"}
            ]}"#,
        )
        .unwrap();
        fs::write(input.join("b.json"), "{broken").unwrap();
        fs::write(
            input.join("c.json"),
            r#"{"a": 1, "b": "clause", "children": [{"a": 2, "b": "subj", "c": "tu"}]}"#,
        )
        .unwrap();
        fs::write(input.join("notes.txt"), "not a tree").unwrap();

        let report = run(&Pipeline::default(), &input, &output, "translation").unwrap();

        assert_eq!(report.realized.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].0.ends_with("b.json"));

        assert_eq!(fs::read_to_string(output.join("translation0.txt")).unwrap(), "Io essere.");
        assert_eq!(fs::read_to_string(output.join("translation1.txt")).unwrap(), "Tu.");
        assert!(!output.join("translation2.txt").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unwritable_target_does_not_stop_batch() {
        let dir = scratch("unwritable");
        let input = dir.join("trees");
        let output = dir.join("out");
        fs::create_dir_all(&input).unwrap();
        // A directory squats on the first output name
        fs::create_dir_all(output.join("translation0.txt")).unwrap();

        fs::write(
            input.join("a.json"),
            r#"{"a": 1, "b": "clause", "children": [{"a": 2, "b": "subj", "c": "io"}]}"#,
        )
        .unwrap();
        fs::write(
            input.join("b.json"),
            r#"{"a": 1, "b": "clause", "children": [{"a": 2, "b": "subj", "c": "tu"}]}"#,
        )
        .unwrap();

        let report = run(&Pipeline::default(), &input, &output, "translation").unwrap();

        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].0.ends_with("a.json"));
        assert_eq!(report.realized.len(), 1);
        assert_eq!(fs::read_to_string(output.join("translation1.txt")).unwrap(), "Tu.");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_input_dir() {
        let dir = scratch("missing");
        let result = run(&Pipeline::default(), &dir.join("nope"), &dir.join("out"), "t");
        assert!(result.is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
