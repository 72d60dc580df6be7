use std::fs;

use keel::run_script;
use walkdir::WalkDir;

#[test]
fn sample_scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "kl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_script(&source) {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No sample scripts found in scripts/");
}
