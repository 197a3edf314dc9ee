//! Git repository metadata
//!
//! Collects the current branch and the most recent commit summaries for the
//! repository containing the scan root. Any failure (no repository, unborn
//! HEAD, libgit2 error) degrades to [`GitInfo::Unavailable`].

use std::path::Path;

use git2::{Repository, Sort};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of commits listed in a snapshot.
pub const RECENT_COMMIT_LIMIT: usize = 5;

/// Value written when no git metadata could be collected.
pub const GIT_UNAVAILABLE: &str = "Git information not available";

/// Version-control state attached to a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GitInfo {
    Available {
        branch: String,
        recent_commits: Vec<String>,
    },
    Unavailable(GitUnavailable),
}

/// Serialized form of [`GitInfo::Unavailable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GitUnavailable {
    #[serde(rename = "Git information not available")]
    NotAvailable,
}

impl GitInfo {
    pub fn unavailable() -> Self {
        GitInfo::Unavailable(GitUnavailable::NotAvailable)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, GitInfo::Available { .. })
    }

    /// Collect metadata for the repository containing `path`.
    pub fn collect(path: &Path) -> Self {
        let now = chrono::Utc::now().timestamp();
        match read_git_info(path, now) {
            Ok(info) => info,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "git metadata unavailable");
                Self::unavailable()
            }
        }
    }
}

fn read_git_info(path: &Path, now: i64) -> Result<GitInfo, git2::Error> {
    let repo = Repository::discover(path)?;
    let head = repo.head()?;
    let branch = if repo.head_detached()? {
        "HEAD".to_string()
    } else {
        head.shorthand().unwrap_or("HEAD").to_string()
    };

    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
    revwalk.push_head()?;

    let mut recent_commits = Vec::with_capacity(RECENT_COMMIT_LIMIT);
    for oid in revwalk.take(RECENT_COMMIT_LIMIT) {
        let commit = repo.find_commit(oid?)?;
        let short_id = commit.as_object().short_id()?;
        let committed = commit.committer().when().seconds();
        recent_commits.push(format!(
            "{} - {} ({})",
            short_id.as_str().unwrap_or_default(),
            commit.summary().unwrap_or_default(),
            format_relative_time(committed, now)
        ));
    }

    Ok(GitInfo::Available {
        branch,
        recent_commits,
    })
}

/// Describe `time` relative to `now` the way `git log --format=%cr` does.
pub fn format_relative_time(time: i64, now: i64) -> String {
    if now < time {
        return "in the future".to_string();
    }
    let mut diff = (now - time) as u64;

    if diff < 90 {
        return ago(diff, "second");
    }
    diff = (diff + 30) / 60;
    if diff < 90 {
        return ago(diff, "minute");
    }
    diff = (diff + 30) / 60;
    if diff < 36 {
        return ago(diff, "hour");
    }
    // Days from here on
    diff = (diff + 12) / 24;
    if diff < 14 {
        return ago(diff, "day");
    }
    if diff < 70 {
        return ago((diff + 3) / 7, "week");
    }
    if diff < 365 {
        return ago((diff + 15) / 30, "month");
    }
    if diff < 1825 {
        let total_months = (diff * 12 * 2 + 365) / (365 * 2);
        let years = total_months / 12;
        let months = total_months % 12;
        if months > 0 {
            return format!("{}, {}", plural(years, "year"), ago(months, "month"));
        }
        return ago(years, "year");
    }
    ago((diff + 183) / 365, "year")
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

fn ago(n: u64, unit: &str) -> String {
    format!("{} ago", plural(n, unit))
}
