//! Full pipeline against the live services. Run with `--features api` and
//! `OPENAI_API_KEY` set.

use lectern::{LecternConfig, RunState, build_pipeline};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires OPENAI_API_KEY and network access
async fn test_space_exploration_end_to_end() {
    let _ = dotenvy::dotenv();
    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY not set");

    let config = LecternConfig::bundled().expect("bundled config parses");
    let mut pipeline = build_pipeline(&config, &api_key).expect("pipeline builds");

    let run = pipeline
        .submit("space exploration")
        .await
        .expect("run succeeds");

    assert_eq!(*run.state(), RunState::ScriptGenerated);
    assert!(!run.titles().is_empty());
    assert!(!run.script().trim().is_empty());
    assert_eq!(pipeline.title_history().len(), 1);
    assert_eq!(pipeline.script_history().len(), 1);
}
