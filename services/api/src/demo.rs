use crate::infra::{build_wall_service, initial_store, ConfiguredGenerator};
use clap::Args;
use ishtehar::config::AppConfig;
use ishtehar::error::AppError;
use ishtehar::wall::{
    BanConfirmation, BanOutcome, Category, ModerationDecision, Post, PostId, PostType,
    Submission, WallFilter, WallService,
};
use tokio_util::sync::CancellationToken;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the AI manifesto draft at the end of the walkthrough.
    #[arg(long)]
    pub(crate) skip_manifesto: bool,
    /// Author whose posts are purged in the ban step.
    #[arg(long, default_value = "রহিম মিয়া")]
    pub(crate) ban_author: String,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        skip_manifesto,
        ban_author,
    } = args;

    let config = AppConfig::load()?;
    let service = build_wall_service(&config.summarizer, initial_store(true));

    println!("People's manifesto wall demo");
    render_posts("Public wall (seed data)", &service.public_wall(&WallFilter::default()));

    let submission = Submission::text(
        "প্রতিটি উপজেলায় কারিগরি প্রশিক্ষণ কেন্দ্র চাই।",
        Category::Education,
    )
    .by("করিম")
    .validated()?;
    let created = service.submit(submission);
    println!(
        "\nSubmitted {} by {} -> status {}",
        created.id,
        created.author_name.as_deref().unwrap_or("anonymous"),
        created.status.label()
    );

    render_posts("Moderation queue", &service.pending());

    service.set_status(&created.id, ModerationDecision::Approved);
    service.set_status(&PostId::from("4"), ModerationDecision::Rejected);
    println!("\nApproved {} and rejected 4", created.id);

    for _ in 0..2 {
        service.like(&created.id);
    }

    render_posts(
        "Public wall (text posts only)",
        &service.public_wall(&WallFilter::default().post_type(PostType::Text)),
    );

    match service.ban_author(Some(&ban_author), BanConfirmation::Confirmed) {
        BanOutcome::Removed { count } => {
            println!("\nBanned '{ban_author}': {count} post(s) removed")
        }
        BanOutcome::SkippedNoAuthor | BanOutcome::SkippedUnconfirmed => {
            println!("\nBan skipped")
        }
    }

    render_analytics(&service);

    if skip_manifesto {
        return Ok(());
    }

    println!("\nManifesto draft (Ctrl-C to cancel)");
    let cancel = CancellationToken::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    match service.draft_manifesto_with_cancel(&cancel).await {
        Ok(summary) => println!("{summary}"),
        Err(refusal) => println!("  {refusal}"),
    }
    watcher.abort();

    Ok(())
}

fn render_posts(title: &str, posts: &[Post]) {
    if posts.is_empty() {
        println!("\n{title}: none");
        return;
    }

    println!("\n{title}");
    for post in posts {
        println!(
            "- {} | {} | [{}] {} | {} likes | {}",
            post.id,
            post.post_type.key(),
            post.category.label(),
            post.content,
            post.likes,
            post.author_name.as_deref().unwrap_or("anonymous")
        );
    }
}

fn render_analytics(service: &WallService<ConfiguredGenerator>) {
    let analytics = service.analytics();

    println!("\nStatus breakdown ({} posts)", analytics.total);
    for entry in &analytics.status_breakdown {
        println!("- {}: {}", entry.label, entry.count);
    }

    println!("\nCategory breakdown");
    for entry in analytics.category_breakdown.iter().filter(|entry| entry.count > 0) {
        println!("- {}: {}", entry.label, entry.count);
    }
}
