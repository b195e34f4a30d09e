/// End-to-end tests against the real file system
/// Tests the complete flow: parse → resolve → check → render → write
use dtogen_bundle::{Container, ContainerRegistry};
use dtogen_common::RealFileSystem;
use dtogen_compiler_php::CompileOptions;
use dtogen_generator::{GenerateError, GenerationRequest, Generator};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn registry(root: &Path) -> ContainerRegistry {
    std::iter::once(Container::new(
        "AcmeBlogBundle",
        root.join("src/Acme/BlogBundle"),
        "Acme\\BlogBundle",
    ))
    .collect()
}

/// Every file below `dir`, relative to it, sorted
fn snapshot(dir: &Path) -> Vec<String> {
    fn walk(dir: &Path, base: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            out.push(path.strip_prefix(base).unwrap().display().to_string());
            if path.is_dir() {
                walk(&path, base, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(dir, dir, &mut out);
    out.sort();
    out
}

#[test]
fn test_generates_dto_and_assembler_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry(temp_dir.path());
    let generator = Generator::new(&RealFileSystem, &registry);

    let request = GenerationRequest::parse(
        "AcmeBlogBundle:Blog/PostDTO",
        "string:title \\DateTime:createdAt boolean:isPublished",
        CompileOptions {
            with_assembler: true,
            ..CompileOptions::default()
        },
    )
    .unwrap();

    let plan = generator.generate(&request).unwrap();
    assert_eq!(plan.artifacts.len(), 2);

    let dto_path = temp_dir
        .path()
        .join("src/Acme/BlogBundle/Model/Blog/PostDTO.php");
    let dto = fs::read_to_string(&dto_path).unwrap();
    assert!(dto.starts_with("<?php\n\nnamespace Acme\\BlogBundle\\Model\\Blog;\n"));
    assert!(dto.contains("class PostDTO\n{"));
    assert!(dto.contains("public function setIsPublished($isPublished)"));

    let assembler_path = temp_dir
        .path()
        .join("src/Acme/BlogBundle/Model/Blog/PostDTOAssembler.php");
    let assembler = fs::read_to_string(&assembler_path).unwrap();
    assert!(assembler.starts_with("<?php\n\n"));
    assert!(assembler.contains("class PostDTOAssembler"));
}

#[test]
fn test_written_file_matches_plan_content() {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry(temp_dir.path());
    let generator = Generator::new(&RealFileSystem, &registry);
    let request = GenerationRequest::parse(
        "AcmeBlogBundle:TagDTO",
        "string:label",
        CompileOptions::default(),
    )
    .unwrap();

    let plan = generator.generate(&request).unwrap();

    let artifact = &plan.artifacts[0];
    let on_disk = fs::read_to_string(&artifact.path).unwrap();
    assert_eq!(on_disk, format!("<?php\n\n{}", artifact.content));
}

#[test]
fn test_existing_file_is_left_alone_and_nothing_else_changes() {
    let temp_dir = TempDir::new().unwrap();
    let model_dir = temp_dir.path().join("src/Acme/BlogBundle/Model/Blog");
    fs::create_dir_all(&model_dir).unwrap();
    fs::write(model_dir.join("PostDTO.php"), "<?php // hand written").unwrap();

    let before = snapshot(temp_dir.path());
    let registry = registry(temp_dir.path());
    let generator = Generator::new(&RealFileSystem, &registry);
    let request = GenerationRequest::parse(
        "AcmeBlogBundle:Blog/PostDTO",
        "string:title",
        CompileOptions {
            with_assembler: true,
            ..CompileOptions::default()
        },
    )
    .unwrap();

    let err = generator.generate(&request).unwrap_err();

    assert!(matches!(err, GenerateError::ArtifactExists { .. }));
    assert_eq!(snapshot(temp_dir.path()), before);
    assert_eq!(
        fs::read_to_string(model_dir.join("PostDTO.php")).unwrap(),
        "<?php // hand written"
    );
}

#[test]
fn test_second_run_is_refused() {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry(temp_dir.path());
    let generator = Generator::new(&RealFileSystem, &registry);
    let request = GenerationRequest::parse(
        "AcmeBlogBundle:Blog/PostDTO",
        "string:title",
        CompileOptions::default(),
    )
    .unwrap();

    generator.generate(&request).unwrap();
    let first = snapshot(temp_dir.path());

    assert!(matches!(
        generator.generate(&request),
        Err(GenerateError::ArtifactExists { .. })
    ));
    assert_eq!(snapshot(temp_dir.path()), first);
}

#[test]
fn test_rendering_is_reproducible_across_runs() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let raw = "string:title integer:authorId \\DateTime:createdAt string:title";

    let mut outputs = Vec::new();
    for dir in [&first_dir, &second_dir] {
        let registry = registry(dir.path());
        let generator = Generator::new(&RealFileSystem, &registry);
        let request = GenerationRequest::parse(
            "AcmeBlogBundle:Blog/PostDTO",
            raw,
            CompileOptions::default(),
        )
        .unwrap();
        let plan = generator.generate(&request).unwrap();
        outputs.push(fs::read(&plan.artifacts[0].path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_plan_serializes_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry(temp_dir.path());
    let generator = Generator::new(&RealFileSystem, &registry);
    let request = GenerationRequest::parse(
        "AcmeBlogBundle:PostDTO",
        "",
        CompileOptions {
            with_assembler: true,
            ..CompileOptions::default()
        },
    )
    .unwrap();

    let plan = generator.prepare(&request).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["artifacts"][0]["kind"], "main");
    assert_eq!(json["artifacts"][1]["kind"], "assembler");
    assert_eq!(json["container"]["name"], "AcmeBlogBundle");
}
