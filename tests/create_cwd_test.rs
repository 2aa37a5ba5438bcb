use anyhow::Result;
use dognames::{
    build_client, AppConfig, DogEngine, DrawMode, HttpDataset, HttpMedia, LocalStorage,
};
use httpmock::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// Without an output directory the picture lands in the working directory.
#[tokio::test]
async fn test_create_defaults_to_working_directory() -> Result<()> {
    let workdir = TempDir::new()?;
    std::env::set_current_dir(workdir.path())?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/dogs.csv");
        then.status(200).body(
            "StichtagDatJahr,HundenameText,GebDatHundJahr,SexHundCd,SexHundLang,SexHundSort,AnzHunde\n\
             2015,Rex,2012,1,male,m,1\n",
        );
    });
    server.mock(|when, then| {
        when.method(GET).path("/woof.json");
        then.status(200)
            .json_body(serde_json::json!({ "url": server.url("/pics/a1.jpg") }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/pics/a1.jpg");
        then.status(200).body("JPEG");
    });

    let client = build_client(&AppConfig::default())?;
    let engine = DogEngine::new(
        HttpDataset::new(client.clone(), server.url("/dogs.csv")),
        HttpMedia::new(client, server.url("/woof.json")),
        LocalStorage::current_dir(),
    );

    let mut rng = StdRng::seed_from_u64(1);
    let dog = engine
        .create_with_rng(2015, DrawMode::Independent, &mut rng)
        .await?;

    assert_eq!(dog.name, "Rex");
    assert_eq!(dog.birth_year, 2012);
    // named after the report year, not the birth year
    assert_eq!(dog.image_path, std::path::Path::new(".").join("Rex_2015.jpg"));
    assert_eq!(std::fs::read(workdir.path().join("Rex_2015.jpg"))?, b"JPEG");
    assert!(!workdir.path().join("Rex_2012.jpg").exists());
    Ok(())
}
