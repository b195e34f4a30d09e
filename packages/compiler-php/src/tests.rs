use crate::{capitalize, namespace_for, render, ArtifactKind, CompileOptions};
use dtogen_bundle::Container;
use dtogen_parser::{parse_properties, parse_reference, PropertyList};
use proptest::prelude::*;

fn container() -> Container {
    Container::new("AcmeBlogBundle", "/srv/acme/BlogBundle", "Acme\\BlogBundle")
}

fn render_main(reference: &str, properties: &str) -> String {
    let identity = parse_reference(reference).expect("Failed to parse reference");
    let properties = parse_properties(properties).expect("Failed to parse properties");
    let artifacts = render(&identity, &container(), &properties, &CompileOptions::default());

    artifacts[0].content.clone()
}

#[test]
fn test_simple_dto() {
    let result = render_main("AcmeBlogBundle:Blog/PostDTO", "string:name");

    let expected = r#"namespace Acme\BlogBundle\Model\Blog;

/**
 * PostDTO
 */
class PostDTO
{
    /**
     * @var string
     */
    private $name;

    /**
     * Get name
     *
     * @return string
     */
    public function getName()
    {
        return $this->name;
    }

    /**
     * Set name
     *
     * @param string $name
     * @return PostDTO
     */
    public function setName($name)
    {
        $this->name = $name;

        return $this;
    }
}
"#;

    assert_eq!(result, expected);
}

#[test]
fn test_empty_dto() {
    let result = render_main("AcmeBlogBundle:PostDTO", "");

    assert_eq!(
        result,
        "namespace Acme\\BlogBundle\\Model;\n\n/**\n * PostDTO\n */\nclass PostDTO\n{\n}\n"
    );
}

#[test]
fn test_fields_then_accessors_in_list_order() {
    let result = render_main(
        "AcmeBlogBundle:Blog/PostDTO",
        "string:title \\DateTime:createdAt integer:authorId",
    );

    let positions: Vec<usize> = [
        "private $title;",
        "private $createdAt;",
        "private $authorId;",
        "function getTitle()",
        "function setTitle($title)",
        "function getCreatedAt()",
        "function setCreatedAt($createdAt)",
        "function getAuthorId()",
        "function setAuthorId($authorId)",
    ]
    .iter()
    .map(|needle| result.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(result.contains("@var \\DateTime"));
    assert!(result.contains("@param integer $authorId"));
}

#[test]
fn test_setters_return_receiver() {
    let result = render_main("AcmeBlogBundle:PostDTO", "string:a string:b string:c");

    assert_eq!(result.matches("return $this;").count(), 3);
    assert_eq!(result.matches("@return PostDTO").count(), 3);
}

#[test]
fn test_custom_root_directory() {
    let identity = parse_reference("AcmeBlogBundle:Blog/PostDTO").unwrap();
    let options = CompileOptions {
        root_directory: "TransportObjects/V1".to_string(),
        ..CompileOptions::default()
    };

    let artifacts = render(&identity, &container(), &PropertyList::new(), &options);

    assert!(artifacts[0]
        .content
        .starts_with("namespace Acme\\BlogBundle\\TransportObjects\\V1\\Blog;\n"));
}

#[test]
fn test_no_namespace_when_everything_is_empty() {
    let identity = parse_reference("App:PostDTO").unwrap();
    let container = Container::new("App", "/srv/app", "");

    assert_eq!(namespace_for(&identity, &container, ""), "");

    let options = CompileOptions {
        root_directory: String::new(),
        ..CompileOptions::default()
    };
    let artifacts = render(&identity, &container, &PropertyList::new(), &options);
    assert!(artifacts[0].content.starts_with("/**\n * PostDTO\n */\nclass PostDTO\n"));
}

#[test]
fn test_single_artifact_without_assembler() {
    let identity = parse_reference("AcmeBlogBundle:Blog/PostDTO").unwrap();

    let artifacts = render(
        &identity,
        &container(),
        &PropertyList::new(),
        &CompileOptions::default(),
    );

    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].kind, ArtifactKind::Main);
    assert_eq!(artifacts[0].file_name, "PostDTO.php");
}

#[test]
fn test_assembler_follows_main_artifact() {
    let identity = parse_reference("AcmeBlogBundle:Blog/PostDTO").unwrap();
    let options = CompileOptions {
        with_assembler: true,
        assembler_domain_type: "\\Acme\\BlogBundle\\Entity\\Post".to_string(),
        ..CompileOptions::default()
    };

    let artifacts = render(&identity, &container(), &PropertyList::new(), &options);

    assert_eq!(artifacts.len(), 2);
    assert_eq!(artifacts[0].kind, ArtifactKind::Main);
    assert_eq!(artifacts[1].kind, ArtifactKind::Assembler);
    assert_eq!(artifacts[1].file_name, "PostDTOAssembler.php");

    let assembler = &artifacts[1].content;
    assert!(assembler.starts_with("namespace Acme\\BlogBundle\\Model\\Blog;\n"));
    assert!(assembler.contains("class PostDTOAssembler\n{"));
    assert!(assembler.contains("@param \\Acme\\BlogBundle\\Entity\\Post $domain"));
    assert!(assembler.contains("public function toDTO($domain)"));
    assert!(assembler.contains("$dto = new PostDTO();"));
    assert!(assembler.contains("public function fromDTO(PostDTO $dto)"));
    assert!(assembler.contains("@return \\Acme\\BlogBundle\\Entity\\Post"));
}

#[test]
fn test_default_domain_type_placeholder() {
    let identity = parse_reference("AcmeBlogBundle:PostDTO").unwrap();
    let options = CompileOptions {
        with_assembler: true,
        ..CompileOptions::default()
    };

    let artifacts = render(&identity, &container(), &PropertyList::new(), &options);

    assert!(artifacts[1].content.contains("@param mixed $domain"));
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("name"), "Name");
    assert_eq!(capitalize("createdAt"), "CreatedAt");
    assert_eq!(capitalize("_private"), "_private");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_preamble_is_not_part_of_rendered_text() {
    let result = render_main("AcmeBlogBundle:PostDTO", "string:name");

    assert!(!result.contains("<?php"));
}

fn property_list() -> impl Strategy<Value = PropertyList> {
    prop::collection::vec(("[a-z][a-zA-Z0-9]{0,8}", "(string|integer|boolean|float)"), 0..10)
        .prop_map(|pairs| {
            let mut properties = PropertyList::new();
            for (name, type_) in pairs {
                // Duplicates from the generator are simply dropped
                let _ = properties.add(&name, &type_);
            }
            properties
        })
}

proptest! {
    /// N properties yield N fields and N accessor pairs, and rendering twice is byte-identical
    #[test]
    fn prop_render_counts_and_determinism(properties in property_list(), with_assembler in any::<bool>()) {
        let identity = parse_reference("AcmeBlogBundle:Blog/PostDTO").unwrap();
        let options = CompileOptions { with_assembler, ..CompileOptions::default() };

        let first = render(&identity, &container(), &properties, &options);
        let second = render(&identity, &container(), &properties, &options);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), if with_assembler { 2 } else { 1 });

        let main = &first[0].content;
        let n = properties.len();
        prop_assert_eq!(main.matches("    private $").count(), n);
        prop_assert_eq!(main.matches("public function get").count(), n);
        prop_assert_eq!(main.matches("public function set").count(), n);

        let mut last = 0;
        for spec in &properties {
            let getter = format!("public function get{}()", capitalize(&spec.name));
            let position = main.find(&getter).unwrap();
            prop_assert!(position >= last);
            last = position;
        }
    }
}
