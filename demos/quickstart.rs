//! Quick-start examples for the CloudGlue Rust SDK.
//!
//! Run with:
//!   CLOUDGLUE_API_KEY=cg_live_... cargo run --example quickstart
//!
//! Or pass the key directly in code (not recommended for production).

use cloudglue::{ChatCompletionRequest, ChatMessage, ClientBuilder, WaitOptions};
use serde_json::json;
use std::time::Duration;

#[tokio::main]
async fn main() -> cloudglue::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Create a client (reads CLOUDGLUE_API_KEY from environment)
    // -----------------------------------------------------------------------
    let client = ClientBuilder::new().build()?;

    // Or provide the key directly:
    // let client = Client::new("cg_live_abc123");

    // -----------------------------------------------------------------------
    // 2. Upload a local video and wait until it is ready
    // -----------------------------------------------------------------------
    let file = client
        .files
        .upload("demo.mp4", Some(&json!({"category": "product-demo"})))
        .await?;
    println!("Uploaded {} (status: {})", file.id, file.status);

    let file = client.files.wait_until_ready(&file.id, None).await?;
    println!("File is now {}", file.status);
    if let Some(info) = &file.video_info {
        println!(
            "  {:.1}s, {}x{}",
            info.duration_seconds.unwrap_or_default(),
            info.width.unwrap_or_default(),
            info.height.unwrap_or_default()
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // 3. Create a collection and add the video to it
    // -----------------------------------------------------------------------
    let collection = client
        .collections
        .create("product-demos", Some("Walkthroughs of the product"), None, None)
        .await?;
    println!("Collection: {}", collection.id);

    client.collections.add_video(&collection.id, &file.id).await?;
    let video = client
        .collections
        .wait_for_video(&collection.id, &file.id, None)
        .await?;
    println!("Video indexed (status: {})", video.status);
    println!();

    // -----------------------------------------------------------------------
    // 4. Ask questions about the collection, with citations
    // -----------------------------------------------------------------------
    let request = ChatCompletionRequest::new(vec![ChatMessage::user(
        "What features are demonstrated in these videos?",
    )])
    .with_collections(vec![collection.id.clone()])
    .with_include_citations(true);

    let completion = client.chat.completions.create(request).await?;
    println!("Answer: {}", completion.content().unwrap_or_default());
    for citation in completion.citations.iter().flatten() {
        println!(
            "  [{:.1}s - {:.1}s] {}",
            citation.start_time.unwrap_or_default(),
            citation.end_time.unwrap_or_default(),
            citation.text.as_deref().unwrap_or_default()
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // 5. Describe a video end to end (create + poll in one call)
    // -----------------------------------------------------------------------
    let options = WaitOptions {
        poll_interval: Duration::from_secs(3),
        timeout: Duration::from_secs(600),
    };
    let job = client
        .describe
        .run(
            &format!("cloudglue://files/{}", file.id),
            Some(&json!({"enable_scene_text": false})),
            Some(options),
        )
        .await?;

    println!("Describe job {} finished: {}", job.job_id, job.status);
    if let Some(data) = &job.data {
        println!("  Title: {}", data.title.as_deref().unwrap_or("untitled"));
        println!("  Summary: {}", data.summary.as_deref().unwrap_or_default());
        for doc in &data.segment_docs {
            println!(
                "  [{:.1}s - {:.1}s] {}",
                doc.start_time.unwrap_or_default(),
                doc.end_time.unwrap_or_default(),
                doc.speech.as_deref().unwrap_or_default()
            );
        }
    }
    println!();

    // -----------------------------------------------------------------------
    // 6. List files with pagination
    // -----------------------------------------------------------------------
    let mut cursor: Option<String> = None;
    loop {
        let page = client
            .files
            .list(
                Some(&json!({"status": "ready"})),
                cursor.as_deref(),
                Some(10),
            )
            .await?;

        for file in &page.data {
            println!(
                "  {} | {} | {}",
                file.id,
                file.status,
                file.filename.as_deref().unwrap_or("-")
            );
        }

        if !page.has_more() {
            break;
        }
        cursor = page.next_cursor;
    }

    Ok(())
}
