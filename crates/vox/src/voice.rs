//! Voice reference classification and resolution.
//!
//! A user-supplied token is either an opaque voice ID or a name query; the
//! split is decided up front by `VoiceRef::classify`, and name queries are
//! resolved against the remote listing.

use async_trait::async_trait;

use crate::client::{ElevenLabsClient, Voice};
use crate::error::{Result, VoxError};

/// Source of the remote voice directory. Trait seam so resolution logic can
/// be exercised without HTTP.
#[async_trait]
pub trait VoiceDirectory: Send + Sync {
    async fn list(&self, search: Option<&str>) -> Result<Vec<Voice>>;
}

#[async_trait]
impl VoiceDirectory for ElevenLabsClient {
    async fn list(&self, search: Option<&str>) -> Result<Vec<Voice>> {
        self.list_voices(search).await
    }
}

/// A classified user voice token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceRef {
    /// Token assumed to be an opaque provider ID, used without lookup.
    ExplicitId(String),
    /// Token treated as a free-text name search.
    NameQuery(String),
}

impl VoiceRef {
    /// Classify a token. Provider IDs are 20-character mixed-alphanumeric
    /// strings, while human-readable names are short or digit-free, so a
    /// token of 15+ characters containing an ASCII digit is taken to be an
    /// ID. Everything else becomes a name query.
    pub fn classify(token: &str) -> Self {
        if token.len() >= 15 && token.bytes().any(|b| b.is_ascii_digit()) {
            VoiceRef::ExplicitId(token.to_string())
        } else {
            VoiceRef::NameQuery(token.to_string())
        }
    }
}

/// Outcome of voice resolution, preserving how the choice was made so the
/// caller can report it.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Token used directly as an ID, no remote lookup.
    Explicit(String),
    /// No token given; first voice of the unfiltered remote listing.
    Default(Voice),
    /// Case-insensitive exact name match.
    Exact(Voice),
    /// First entry of the filtered listing; deterministic, no scoring.
    Closest(Voice),
}

impl Resolution {
    pub fn voice_id(&self) -> &str {
        match self {
            Resolution::Explicit(id) => id,
            Resolution::Default(v) | Resolution::Exact(v) | Resolution::Closest(v) => &v.voice_id,
        }
    }
}

/// Resolve a user voice token against the directory.
///
/// With no token the first remotely listed voice is chosen (remote order,
/// not locally sorted). ID-shaped tokens short-circuit without a lookup.
/// Name queries prefer an exact case-insensitive match and otherwise fall
/// back to the first search result.
pub async fn resolve_voice<D: VoiceDirectory + ?Sized>(
    directory: &D,
    token: Option<&str>,
) -> Result<Resolution> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        let voices = directory.list(None).await?;
        let first = voices
            .into_iter()
            .next()
            .ok_or(VoxError::NoVoicesAvailable)?;
        return Ok(Resolution::Default(first));
    };

    match VoiceRef::classify(token) {
        VoiceRef::ExplicitId(id) => Ok(Resolution::Explicit(id)),
        VoiceRef::NameQuery(query) => {
            let voices = directory.list(Some(&query)).await?;
            let query_lower = query.to_lowercase();

            if let Some(exact) = voices.iter().find(|v| v.name.to_lowercase() == query_lower) {
                return Ok(Resolution::Exact(exact.clone()));
            }

            match voices.into_iter().next() {
                Some(voice) => Ok(Resolution::Closest(voice)),
                None => Err(VoxError::VoiceNotFound(query)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct StubDirectory {
        voices: Vec<Voice>,
        calls: Mutex<Vec<Option<String>>>,
    }

    impl StubDirectory {
        fn new(names: &[(&str, &str)]) -> Self {
            let voices = names
                .iter()
                .map(|(id, name)| Voice {
                    voice_id: id.to_string(),
                    name: name.to_string(),
                    category: "premade".to_string(),
                    labels: None,
                    preview_url: None,
                })
                .collect();
            Self {
                voices,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl VoiceDirectory for StubDirectory {
        async fn list(&self, search: Option<&str>) -> Result<Vec<Voice>> {
            self.calls
                .lock()
                .unwrap()
                .push(search.map(str::to_string));
            // Server-side filtering is a substring match on the name.
            Ok(match search {
                Some(term) => {
                    let term = term.to_lowercase();
                    self.voices
                        .iter()
                        .filter(|v| v.name.to_lowercase().contains(&term))
                        .cloned()
                        .collect()
                }
                None => self.voices.clone(),
            })
        }
    }

    #[test]
    fn classify_splits_ids_from_names() {
        assert_eq!(
            VoiceRef::classify("Roger"),
            VoiceRef::NameQuery("Roger".into())
        );
        assert_eq!(
            VoiceRef::classify("JBFqnCBsd6RMkjVDRZzb"),
            VoiceRef::ExplicitId("JBFqnCBsd6RMkjVDRZzb".into())
        );
        // Long but digit-free still reads as a name.
        assert_eq!(
            VoiceRef::classify("extraordinarily-long-name"),
            VoiceRef::NameQuery("extraordinarily-long-name".into())
        );
        // Short with digits is a name too.
        assert_eq!(VoiceRef::classify("v1"), VoiceRef::NameQuery("v1".into()));
    }

    #[tokio::test]
    async fn no_token_picks_first_in_remote_order() {
        let dir = StubDirectory::new(&[("v1", "Default"), ("v2", "Aria")]);
        let res = resolve_voice(&dir, None).await.unwrap();
        assert_eq!(res.voice_id(), "v1");
        assert!(matches!(res, Resolution::Default(_)));
    }

    #[tokio::test]
    async fn empty_listing_is_no_voices_available() {
        let dir = StubDirectory::new(&[]);
        let err = resolve_voice(&dir, None).await.unwrap_err();
        assert!(matches!(err, VoxError::NoVoicesAvailable));
    }

    #[tokio::test]
    async fn id_shaped_token_skips_the_lookup() {
        let dir = StubDirectory::new(&[("v1", "Default")]);
        let res = resolve_voice(&dir, Some("JBFqnCBsd6RMkjVDRZzb"))
            .await
            .unwrap();
        assert_eq!(res.voice_id(), "JBFqnCBsd6RMkjVDRZzb");
        assert_eq!(dir.call_count(), 0);
    }

    #[tokio::test]
    async fn exact_match_wins_over_listing_order() {
        let dir = StubDirectory::new(&[("v1", "Rogerio"), ("v2", "Roger")]);
        let res = resolve_voice(&dir, Some("roger")).await.unwrap();
        assert!(matches!(res, Resolution::Exact(_)));
        assert_eq!(res.voice_id(), "v2");
    }

    #[tokio::test]
    async fn first_result_reported_as_closest_match() {
        let dir = StubDirectory::new(&[("v1", "Rogerio"), ("v2", "Rogerina")]);
        let res = resolve_voice(&dir, Some("roger")).await.unwrap();
        assert!(matches!(res, Resolution::Closest(_)));
        assert_eq!(res.voice_id(), "v1");
    }

    #[tokio::test]
    async fn miss_is_voice_not_found() {
        let dir = StubDirectory::new(&[("v1", "Aria")]);
        let err = resolve_voice(&dir, Some("Roger")).await.unwrap_err();
        match err {
            VoxError::VoiceNotFound(name) => assert_eq!(name, "Roger"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn name_query_is_passed_as_search_term() {
        let dir = StubDirectory::new(&[("v1", "Aria")]);
        resolve_voice(&dir, Some("Aria")).await.unwrap();
        assert_eq!(
            dir.calls.lock().unwrap().as_slice(),
            &[Some("Aria".to_string())]
        );
    }
}
