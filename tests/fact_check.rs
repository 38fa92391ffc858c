mod common;

use anyhow::anyhow;
use common::{json_list, records, ScriptedEncyclopedia, ScriptedGenerator};
use newsdesk::models::{Claim, Confidence, VerificationSource};
use newsdesk::pipeline::mock::OfflineGenerator;
use newsdesk::pipeline::verifier::MAX_VERIFIED_CLAIMS;
use newsdesk::pipeline::{ClaimExtractor, ClaimVerifier};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn cross_check_hit_stops_the_chain() {
    let generator = ScriptedGenerator::new(|_| Ok(r#"{"verdict": "true"}"#.to_string()));
    let encyclopedia = ScriptedEncyclopedia::new(|_| Ok(true));
    let articles = records(&[("Airbus orders surge", Some("Record month for jets"))]);

    let result = ClaimVerifier::new(&generator, &encyclopedia)
        .verify(&Claim::new("Airbus booked 120 orders"), &articles)
        .await;

    assert!(result.verified);
    assert_eq!(result.source, VerificationSource::CrossReference);
    assert_eq!(result.sources_count, Some(1));
    assert!(encyclopedia.terms().is_empty());
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn encyclopedia_verifies_with_medium_confidence() {
    let generator = ScriptedGenerator::new(|_| Ok(r#"{"verdict": "true"}"#.to_string()));
    let encyclopedia = ScriptedEncyclopedia::new(|term| Ok(term == "Kilimanjaro"));
    let articles = records(&[("Rain expected", Some("Showers all week"))]);

    let result = ClaimVerifier::new(&generator, &encyclopedia)
        .verify(&Claim::new("Kilimanjaro is 5895 metres tall"), &articles)
        .await;

    assert!(result.verified);
    assert_eq!(result.source, VerificationSource::Wikipedia);
    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(encyclopedia.terms(), vec!["Kilimanjaro".to_string()]);
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn knowledge_check_true_is_low_confidence_verified() {
    let generator = ScriptedGenerator::new(|_| {
        Ok("```json\n{\"verdict\": \"TRUE\", \"explanation\": \"Widely reported\"}\n```".to_string())
    });
    let encyclopedia = ScriptedEncyclopedia::new(|_| Err(anyhow!("timed out")));

    let result = ClaimVerifier::new(&generator, &encyclopedia)
        .verify(&Claim::new("Zorblax merged with Quuxcorp"), &[])
        .await;

    assert!(result.verified);
    assert_eq!(result.source, VerificationSource::GeneralKnowledge);
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.explanation, "Widely reported");
    assert!(generator.prompts()[0].contains("Claim: Zorblax merged with Quuxcorp"));
}

#[tokio::test]
async fn inconclusive_chain_keeps_medium_cross_check_result() {
    let generator = ScriptedGenerator::new(|_| Ok("I am not sure.".to_string()));
    let encyclopedia = ScriptedEncyclopedia::new(|_| Ok(false));
    let articles = records(&[("Rain expected", Some("Showers all week"))]);

    let result = ClaimVerifier::new(&generator, &encyclopedia)
        .verify(&Claim::new("Zorblax merged with Quuxcorp"), &articles)
        .await;

    assert!(!result.verified);
    assert_eq!(result.source, VerificationSource::CrossReference);
    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(generator.prompts().len(), 1);
}

#[tokio::test]
async fn false_verdict_is_not_verified() {
    let generator = ScriptedGenerator::new(|_| {
        Ok(r#"{"verdict": "false", "explanation": "No such merger"}"#.to_string())
    });
    let encyclopedia = ScriptedEncyclopedia::new(|_| Ok(false));

    let result = ClaimVerifier::new(&generator, &encyclopedia)
        .verify(&Claim::new("Zorblax merged with Quuxcorp"), &[])
        .await;

    assert!(!result.verified);
    // With no articles the cross-check still reports medium, so it stays the best candidate.
    assert_eq!(result.confidence, Confidence::Medium);
}

#[tokio::test]
async fn only_first_five_claims_are_verified() {
    let generator = ScriptedGenerator::new(|_| Ok(r#"{"verdict": "uncertain"}"#.to_string()));
    let encyclopedia = ScriptedEncyclopedia::new(|_| Ok(false));
    let claims: Vec<Claim> = (1..=8).map(|i| Claim::new(format!("Claim{i} happened"))).collect();

    let results = ClaimVerifier::new(&generator, &encyclopedia)
        .verify_claims(&claims, &[])
        .await;

    assert_eq!(results.len(), MAX_VERIFIED_CLAIMS);
    assert_eq!(results[4].claim, "Claim5 happened");
    assert_eq!(encyclopedia.terms().len(), 5);
}

#[tokio::test]
async fn extractor_decodes_claim_list() {
    let generator = ScriptedGenerator::new(|_| {
        Ok(format!(
            "```json\n{}\n```",
            json_list(&["Inflation fell to 3.1%", "Unemployment is 4%"])
        ))
    });

    let claims = ClaimExtractor::new(&generator).extract("• Inflation fell").await;

    assert_eq!(
        claims,
        vec![Claim::new("Inflation fell to 3.1%"), Claim::new("Unemployment is 4%")]
    );
    assert!(generator.prompts()[0].contains("• Inflation fell"));
}

#[tokio::test]
async fn extractor_fails_soft() {
    let prose = ScriptedGenerator::new(|_| Ok("Inflation fell, unemployment rose.".to_string()));
    assert!(ClaimExtractor::new(&prose).extract("summary").await.is_empty());

    assert!(ClaimExtractor::new(&OfflineGenerator)
        .extract("summary")
        .await
        .is_empty());
}
