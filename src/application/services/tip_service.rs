//! Tip Service - Personalized water-saving tips
//!
//! Picks a pre-authored tip for the child's age band and routine, asks the
//! LLM to rewrite it for the child's exact age, and records the result in
//! the caller's session. Nothing is recorded when the LLM call fails.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::application::ports::outbound::{ChatMessage, LlmPort, LlmRequest};
use crate::application::services::llm::prompt_builder::build_tip_rewrite_prompt;
use crate::domain::aggregates::TipTable;
use crate::domain::entities::{BaseTip, TipResult, TipSession};
use crate::domain::value_objects::{
    AgeGroup, GenerationSettings, Routine, MAX_CHILD_AGE, MIN_CHILD_AGE,
};

pub const DEFAULT_TIP_MODEL: &str = "gpt-3.5-turbo";

/// Errors that can occur while generating a tip
#[derive(Debug, thiserror::Error)]
pub enum TipServiceError {
    /// Error from the underlying LLM client
    #[error("LLM error: {0}")]
    LlmError(String),
    /// Missing or out-of-range input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// One "Generate Tip" action
#[derive(Debug, Clone, Deserialize)]
pub struct TipRequest {
    pub child_name: String,
    pub child_age: u8,
    pub routine: Routine,
}

impl TipRequest {
    pub fn validate(&self) -> Result<(), TipServiceError> {
        if self.child_name.trim().is_empty() {
            return Err(TipServiceError::InvalidRequest(
                "Please enter your child's name.".to_string(),
            ));
        }
        if !AgeGroup::contains_age(self.child_age) {
            return Err(TipServiceError::InvalidRequest(format!(
                "Child age must be between {} and {}",
                MIN_CHILD_AGE, MAX_CHILD_AGE
            )));
        }
        Ok(())
    }
}

pub struct TipService<L: LlmPort> {
    llm: Arc<L>,
    table: Arc<TipTable>,
    rng: Mutex<StdRng>,
    model: String,
    settings: GenerationSettings,
}

impl<L: LlmPort> TipService<L> {
    /// Create a tip service with an entropy-seeded random source
    pub fn new(llm: Arc<L>, table: Arc<TipTable>) -> Self {
        Self {
            llm,
            table,
            rng: Mutex::new(StdRng::from_entropy()),
            model: DEFAULT_TIP_MODEL.to_string(),
            settings: GenerationSettings::default(),
        }
    }

    /// Make tip selection reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Choose the pre-rewrite tip for an age and routine
    pub async fn select_base_tip(&self, child_age: u8, routine: Routine) -> BaseTip {
        let age_group = AgeGroup::from_age(child_age);
        let mut rng = self.rng.lock().await;
        let tip = self.table.choose(&mut *rng, age_group, routine);

        if tip.is_default {
            tracing::debug!(
                "No tips for {} / {}, using the default tip",
                age_group,
                routine
            );
        }
        tip
    }

    /// Rewrite a base tip for a child of `child_age`; the reply is used verbatim
    pub async fn personalize(
        &self,
        base: &BaseTip,
        child_age: u8,
    ) -> Result<String, TipServiceError> {
        let prompt = build_tip_rewrite_prompt(child_age, &base.phrase);

        let request = LlmRequest::new(vec![ChatMessage::user(prompt)])
            .with_model(self.model.clone())
            .with_temperature(self.settings.tip_temperature)
            .with_max_tokens(Some(self.settings.tip_max_tokens));

        let response = self
            .llm
            .generate(request)
            .await
            .map_err(|e| TipServiceError::LlmError(e.to_string()))?;

        Ok(response.content)
    }

    /// Generate a tip and record it in `session`.
    ///
    /// The session is only touched after the LLM call succeeds.
    pub async fn generate_tip(
        &self,
        session: &mut TipSession,
        request: &TipRequest,
    ) -> Result<TipResult, TipServiceError> {
        request.validate()?;

        let base = self.select_base_tip(request.child_age, request.routine).await;
        let final_tip = self.personalize(&base, request.child_age).await?;

        session.record_tip(request.child_name.trim(), request.child_age, &final_tip);
        tracing::info!(
            session_id = %session.id,
            tips_used = session.tips_used(),
            "Tip generated"
        );

        Ok(TipResult {
            rewritten_phrase: final_tip,
            challenge: base.challenge,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::application::ports::outbound::LlmResponse;
    use crate::domain::entities::TipRecord;
    use crate::domain::value_objects::SessionId;

    /// Records requests and answers with a fixed reply, or fails on demand
    struct MockLlm {
        reply: Option<String>,
        calls: AtomicUsize,
        last_request: StdMutex<Option<LlmRequest>>,
    }

    impl MockLlm {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                calls: AtomicUsize::new(0),
                last_request: StdMutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
                last_request: StdMutex::new(None),
            }
        }
    }

    #[async_trait::async_trait]
    impl LlmPort for MockLlm {
        type Error = String;

        async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request);
            match &self.reply {
                Some(reply) => Ok(LlmResponse {
                    content: reply.clone(),
                    finish_reason: Some("stop".to_string()),
                }),
                None => Err("quota exceeded".to_string()),
            }
        }

        async fn health_check(&self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn table() -> Arc<TipTable> {
        Arc::new(TipTable::new(vec![
            TipRecord::new(
                AgeGroup::ThreeToFive,
                Routine::BrushingTeeth,
                "Turn off the tap while you brush!",
                "Brush with the tap off for a week.",
            ),
            TipRecord::new(
                AgeGroup::SixToEight,
                Routine::WashingHands,
                "Scrub first, then rinse.",
                "Sing the ABCs with the tap off.",
            ),
        ]))
    }

    fn request(name: &str, age: u8, routine: Routine) -> TipRequest {
        TipRequest {
            child_name: name.to_string(),
            child_age: age,
            routine,
        }
    }

    #[tokio::test]
    async fn test_generate_tip_records_history() {
        let llm = Arc::new(MockLlm::replying("Be a tap-off superstar!"));
        let service = TipService::new(llm.clone(), table()).with_seed(1);
        let mut session = TipSession::new(SessionId::new());

        let result = service
            .generate_tip(&mut session, &request("Mia", 4, Routine::BrushingTeeth))
            .await
            .unwrap();

        assert_eq!(result.rewritten_phrase, "Be a tap-off superstar!");
        assert_eq!(result.challenge, "Brush with the tap off for a week.");
        assert_eq!(session.tips_used(), 1);
        assert_eq!(session.history(), &["Mia (4) - Be a tap-off superstar!".to_string()]);
        assert_eq!(session.last_tip(), Some("Be a tap-off superstar!"));
    }

    #[tokio::test]
    async fn test_history_uses_trimmed_name() {
        let llm = Arc::new(MockLlm::replying("Splash less!"));
        let service = TipService::new(llm, table());
        let mut session = TipSession::new(SessionId::new());

        service
            .generate_tip(&mut session, &request("  Mia \t", 4, Routine::BrushingTeeth))
            .await
            .unwrap();

        assert_eq!(session.history(), &["Mia (4) - Splash less!".to_string()]);
    }

    #[tokio::test]
    async fn test_rewrite_request_uses_tip_sampling() {
        let llm = Arc::new(MockLlm::replying("ok"));
        let service = TipService::new(llm.clone(), table()).with_model("tip-model");
        let mut session = TipSession::new(SessionId::new());

        service
            .generate_tip(&mut session, &request("Sam", 7, Routine::WashingHands))
            .await
            .unwrap();

        let sent = llm.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(sent.model.as_deref(), Some("tip-model"));
        assert_eq!(sent.temperature, Some(0.9));
        assert_eq!(sent.max_tokens, Some(100));
        assert!(sent.system_prompt.is_none());
        assert_eq!(
            sent.messages,
            vec![ChatMessage::user(
                "Rewrite this for a 7-year-old in a fun way: 'Scrub first, then rinse.'"
            )]
        );
    }

    #[tokio::test]
    async fn test_history_grows_by_one_per_success() {
        let llm = Arc::new(MockLlm::replying("Save water!"));
        let service = TipService::new(llm, table()).with_seed(3);
        let mut session = TipSession::new(SessionId::new());

        for age in 3..=12 {
            service
                .generate_tip(&mut session, &request("Kai", age, Routine::Showering))
                .await
                .unwrap();
        }

        assert_eq!(session.tips_used(), 10);
        assert_eq!(session.history().len(), 10);
        assert_eq!(session.history()[9], "Kai (12) - Save water!");
    }

    #[tokio::test]
    async fn test_llm_failure_leaves_session_untouched() {
        let llm = Arc::new(MockLlm::failing());
        let service = TipService::new(llm.clone(), table());
        let mut session = TipSession::new(SessionId::new());
        session.record_tip("Ava", 5, "Earlier tip");

        let err = service
            .generate_tip(&mut session, &request("Ava", 5, Routine::BrushingTeeth))
            .await
            .unwrap_err();

        assert!(matches!(err, TipServiceError::LlmError(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.tips_used(), 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.last_tip(), Some("Earlier tip"));
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_before_llm_call() {
        let llm = Arc::new(MockLlm::replying("unused"));
        let service = TipService::new(llm.clone(), table());
        let mut session = TipSession::new(SessionId::new());

        let err = service
            .generate_tip(&mut session, &request("   ", 6, Routine::Other))
            .await
            .unwrap_err();

        assert!(matches!(err, TipServiceError::InvalidRequest(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.tips_used(), 0);
    }

    #[tokio::test]
    async fn test_out_of_range_age_is_rejected() {
        let llm = Arc::new(MockLlm::replying("unused"));
        let service = TipService::new(llm.clone(), table());
        let mut session = TipSession::new(SessionId::new());

        let err = service
            .generate_tip(&mut session, &request("Zoe", 13, Routine::Other))
            .await
            .unwrap_err();

        assert!(matches!(err, TipServiceError::InvalidRequest(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unmatched_routine_falls_back_to_default() {
        let llm = Arc::new(MockLlm::replying("Tap off!"));
        let service = TipService::new(llm.clone(), table());

        let base = service.select_base_tip(10, Routine::BathTime).await;
        assert_eq!(base, BaseTip::fallback());

        let mut session = TipSession::new(SessionId::new());
        let result = service
            .generate_tip(&mut session, &request("Noa", 10, Routine::BathTime))
            .await
            .unwrap();
        assert_eq!(result.challenge, BaseTip::fallback().challenge);
    }
}
