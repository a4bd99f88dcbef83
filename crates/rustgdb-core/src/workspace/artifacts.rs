//! Build artifact enumeration from `cargo --message-format=json` output

use serde::Deserialize;
use std::path::PathBuf;
use tracing::trace;

/// What an executable artifact was built as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Bin,
    Test,
    Bench,
    Example,
}

/// An executable produced by a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    pub package_id: String,
    pub target_name: String,
    pub kind: ArtifactKind,
    pub executable: PathBuf,
}

#[derive(Deserialize)]
struct BuildMessage {
    reason: String,
    #[serde(default)]
    package_id: String,
    target: Option<MessageTarget>,
    profile: Option<MessageProfile>,
    executable: Option<PathBuf>,
}

#[derive(Deserialize)]
struct MessageTarget {
    name: String,
    #[serde(default)]
    kind: Vec<String>,
}

#[derive(Deserialize)]
struct MessageProfile {
    #[serde(default)]
    test: bool,
}

fn classify(target: &MessageTarget, test_profile: bool) -> Option<ArtifactKind> {
    let has = |kind: &str| target.kind.iter().any(|k| k == kind);
    if has("bench") {
        Some(ArtifactKind::Bench)
    } else if test_profile || has("test") {
        Some(ArtifactKind::Test)
    } else if has("example") {
        Some(ArtifactKind::Example)
    } else if has("bin") {
        Some(ArtifactKind::Bin)
    } else {
        None
    }
}

/// Executables reported by a JSON-per-line build event stream
///
/// Lines that are not JSON, events other than `compiler-artifact`, and
/// artifacts without an executable are skipped.
pub fn parse_build_artifacts(output: &str) -> Vec<BuildArtifact> {
    output
        .lines()
        .filter(|line| line.starts_with('{'))
        .filter_map(|line| serde_json::from_str::<BuildMessage>(line).ok())
        .filter(|message| message.reason == "compiler-artifact")
        .filter_map(|message| {
            let executable = message.executable?;
            let target = message.target?;
            let test_profile = message.profile.is_some_and(|p| p.test);
            let kind = classify(&target, test_profile)?;
            trace!("Found {:?} artifact {:?}", kind, executable);
            Some(BuildArtifact {
                package_id: message.package_id,
                target_name: target.name,
                kind,
                executable,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = r#"{"reason":"compiler-artifact","package_id":"core 0.1.0","target":{"kind":["lib"],"name":"core","src_path":"/w/core/src/lib.rs"},"profile":{"test":false},"filenames":["/w/target/debug/libcore.rlib"],"executable":null,"fresh":true}
   Compiling app v0.1.0 (/w)
{"reason":"compiler-artifact","package_id":"app 0.1.0","target":{"kind":["bin"],"name":"app","src_path":"/w/src/main.rs"},"profile":{"test":false},"filenames":["/w/target/debug/app"],"executable":"/w/target/debug/app","fresh":false}
{"reason":"compiler-artifact","package_id":"app 0.1.0","target":{"kind":["bin"],"name":"app","src_path":"/w/src/main.rs"},"profile":{"test":true},"filenames":["/w/target/debug/deps/app-1a2b"],"executable":"/w/target/debug/deps/app-1a2b","fresh":false}
{"reason":"compiler-artifact","package_id":"app 0.1.0","target":{"kind":["bench"],"name":"speed","src_path":"/w/benches/speed.rs"},"profile":{"test":true},"filenames":[],"executable":"/w/target/release/deps/speed-9f","fresh":false}
{"reason":"compiler-artifact","package_id":"app 0.1.0","target":{"kind":["example"],"name":"demo","src_path":"/w/examples/demo.rs"},"profile":{"test":false},"filenames":[],"executable":"/w/target/debug/examples/demo","fresh":false}
{"reason":"build-finished","success":true}"#;

    #[test]
    fn test_parse_executables() {
        let artifacts = parse_build_artifacts(OUTPUT);
        let kinds: Vec<ArtifactKind> = artifacts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ArtifactKind::Bin,
                ArtifactKind::Test,
                ArtifactKind::Bench,
                ArtifactKind::Example
            ]
        );
        assert_eq!(artifacts[0].target_name, "app");
        assert_eq!(artifacts[0].executable, PathBuf::from("/w/target/debug/app"));
        assert_eq!(artifacts[1].package_id, "app 0.1.0");
    }

    #[test]
    fn test_garbage_yields_nothing() {
        assert!(parse_build_artifacts("").is_empty());
        assert!(parse_build_artifacts("error: could not compile\n{broken").is_empty());
    }
}
