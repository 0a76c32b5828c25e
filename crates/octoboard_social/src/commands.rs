//! Embed rendering, pagination, and error-to-message mapping.

use octoboard_error::GithubError;
use octoboard_github::{ContributorProfile, LeaderboardEntry};
use rand::Rng;
use serenity::all::{Colour, CreateEmbed, CreateEmbedFooter};

/// Entries shown per leaderboard page.
pub const PAGE_SIZE: usize = 10;

/// Brand colour for every embed.
const ACCENT: (u8, u8, u8) = (255, 0, 149);

const QUOTES: &[&str] = &[
    "Seriously... If you're gonna win, can you... give me one of your shirts?",
    "btw i use arch",
    "Wait. Open Source is just for the free T-shirt? Always has been.",
    "I'm number #0 in the leaderboard bro! Who can win against me??",
    "I have no idea what I'm doing...",
    "Yes, all of those quotes are not funny. Made by someone not funny.",
    "I'm not an AI, I'm just a randomly picked, stupid string!",
    "skill issue!",
];

fn accent() -> Colour {
    Colour::from_rgb(ACCENT.0, ACCENT.1, ACCENT.2)
}

/// Clamp a requested 1-based page against the entry count.
///
/// Returns the 0-based page index and the total page count. The request is
/// lower-bounded at page 1 and upper-bounded by the last available page; an
/// empty leaderboard still has one (empty) page.
fn clamp_page(requested: i64, entry_count: usize) -> (usize, usize) {
    let page_count = (entry_count.div_ceil(PAGE_SIZE)).max(1);
    let index = requested.max(1) as usize - 1;
    (index.min(page_count - 1), page_count)
}

/// Render one leaderboard page as embed description lines.
///
/// Place numbers are derived from array position: the caller hands us the
/// full descending-sorted sequence and we slice one page out of it.
fn leaderboard_lines(entries: &[LeaderboardEntry], page_index: usize) -> String {
    entries
        .iter()
        .enumerate()
        .skip(page_index * PAGE_SIZE)
        .take(PAGE_SIZE)
        .map(|(position, entry)| {
            format!(
                "`{}` : [`{}`](https://github.com/{}) with a score of **{}** PRs",
                position + 1,
                entry.login(),
                entry.login(),
                entry.score()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the leaderboard embed for a requested page.
pub fn leaderboard_embed(
    entries: &[LeaderboardEntry],
    organization: &str,
    requested_page: i64,
) -> CreateEmbed {
    let (page_index, page_count) = clamp_page(requested_page, entries.len());
    let quote = QUOTES[rand::thread_rng().gen_range(0..QUOTES.len())];

    CreateEmbed::new()
        .title(format!("Leaderboard - {organization}"))
        .colour(accent())
        .description(leaderboard_lines(entries, page_index))
        .footer(CreateEmbedFooter::new(format!(
            "Page {}/{}\n{}",
            page_index + 1,
            page_count,
            quote
        )))
}

/// Build the profile embed for one contributor.
pub fn hero_embed(profile: &ContributorProfile) -> CreateEmbed {
    let name = profile.name().as_deref().unwrap_or("No Name");
    let total_pulls = profile
        .total_pulls()
        .map(|count| count.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    CreateEmbed::new()
        .title(format!("Contributor: {name}"))
        .colour(accent())
        .field(
            "GitHub",
            format!(
                "[{}](https://github.com/{})",
                profile.login(),
                profile.login()
            ),
            true,
        )
        .field("Total PRs", total_pulls, true)
        .thumbnail(profile.avatar_url().as_str())
        .footer(CreateEmbedFooter::new(format!(
            "About: {}",
            profile.bio().as_deref().unwrap_or("No bio")
        )))
}

/// Map a typed upstream error to the user-visible reply.
///
/// 404 means the looked-up entity does not exist; other statuses surface the
/// code. Transport and parse failures get a generic line, with the detail
/// left to the logs.
pub fn github_error_message(err: &GithubError) -> String {
    match err.status() {
        Some(404) => "Could not find what you're looking for :( Try again!".to_string(),
        Some(code) => format!(
            "An unexpected error happened with the GitHub API: Status code: {code}"
        ),
        None => "An unexpected error happened while talking to GitHub. Try again later!".to_string(),
    }
}
