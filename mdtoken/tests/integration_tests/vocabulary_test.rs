// tests/integration_tests/vocabulary_test.rs
use super::common::create_vocabularies;
use anyhow::Result;
use mdtoken::{MetadataError, TopicCategory, Vocabularies};
use tempfile::TempDir;

#[test]
fn test_membership_per_category() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_vocabularies(temp_dir.path())?;

    let vocab = Vocabularies::load(
        &temp_dir.path().join("reference_tokens.txt"),
        &temp_dir.path().join("conceptual_tokens.txt"),
    )?;

    assert!(vocab.get(TopicCategory::Reference).contains("api_name"));
    assert!(!vocab.get(TopicCategory::Conceptual).contains("api_name"));
    assert!(vocab.get(TopicCategory::Conceptual).contains("ms.topic"));
    assert!(!vocab.get(TopicCategory::Reference).contains("# reference topics"));
    Ok(())
}

#[test]
fn test_missing_reference_list() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = Vocabularies::load(
        &temp_dir.path().join("reference_tokens.txt"),
        &temp_dir.path().join("conceptual_tokens.txt"),
    );
    assert!(matches!(
        result,
        Err(MetadataError::VocabularyMissing {
            category: TopicCategory::Reference,
            ..
        })
    ));
    Ok(())
}
