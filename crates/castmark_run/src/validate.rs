//! Run preconditions checked before any generation dispatch.

use castmark_core::{EpisodeInput, MIN_TRANSCRIPT_WORDS, Platform};
use castmark_error::{CastmarkResult, ValidationError, ValidationErrorKind};

/// Validate episode input against the selected platforms.
///
/// A violation aborts the run before any network activity: the transcript
/// must be non-empty and at least [`MIN_TRANSCRIPT_WORDS`] words, at least
/// one platform must be selected, and selecting [`Platform::Social`]
/// requires at least one clip with a non-blank transcript.
pub fn validate_input(input: &EpisodeInput, platforms: &[Platform]) -> CastmarkResult<()> {
    if input.transcript().trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyTranscript).into());
    }
    let words = input.word_count();
    if words < MIN_TRANSCRIPT_WORDS {
        return Err(ValidationError::new(ValidationErrorKind::TranscriptTooShort {
            words,
            minimum: MIN_TRANSCRIPT_WORDS,
        })
        .into());
    }
    if platforms.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::NoPlatformSelected).into());
    }
    if platforms.contains(&Platform::Social) && input.clips_with_content().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::NoClipContent).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use castmark_core::ShortClip;
    use castmark_error::CastmarkErrorKind;

    fn long_transcript() -> String {
        "word ".repeat(MIN_TRANSCRIPT_WORDS)
    }

    fn kind(result: CastmarkResult<()>) -> ValidationErrorKind {
        match *result.unwrap_err().kind() {
            CastmarkErrorKind::Validation(ref e) => e.kind.clone(),
            ref other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_input() {
        let input = EpisodeInput::builder()
            .transcript(long_transcript())
            .build()
            .unwrap();
        assert!(validate_input(&input, &[Platform::YouTube]).is_ok());
    }

    #[test]
    fn rejects_blank_transcript() {
        let input = EpisodeInput::builder().transcript("   ").build().unwrap();
        assert_eq!(
            kind(validate_input(&input, &[Platform::YouTube])),
            ValidationErrorKind::EmptyTranscript
        );
    }

    #[test]
    fn rejects_short_transcript() {
        let input = EpisodeInput::builder()
            .transcript("only a few words here")
            .build()
            .unwrap();
        assert_eq!(
            kind(validate_input(&input, &[Platform::YouTube])),
            ValidationErrorKind::TranscriptTooShort {
                words: 5,
                minimum: MIN_TRANSCRIPT_WORDS
            }
        );
    }

    #[test]
    fn rejects_empty_platform_selection() {
        let input = EpisodeInput::builder()
            .transcript(long_transcript())
            .build()
            .unwrap();
        assert_eq!(
            kind(validate_input(&input, &[])),
            ValidationErrorKind::NoPlatformSelected
        );
    }

    #[test]
    fn rejects_social_without_clip_content() {
        let input = EpisodeInput::builder()
            .transcript(long_transcript())
            .clips(vec![ShortClip::new("empty", "  ")])
            .build()
            .unwrap();
        assert_eq!(
            kind(validate_input(&input, &[Platform::Social])),
            ValidationErrorKind::NoClipContent
        );
    }

    #[test]
    fn social_with_one_real_clip_passes() {
        let input = EpisodeInput::builder()
            .transcript(long_transcript())
            .clips(vec![
                ShortClip::new("empty", ""),
                ShortClip::new("real", "clip audio here"),
            ])
            .build()
            .unwrap();
        assert!(validate_input(&input, &[Platform::Social]).is_ok());
    }
}
