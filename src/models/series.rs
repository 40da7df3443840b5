use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{DEFAULT_STATUS, SeriesId};

/// A tracked show with its watch progress and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub title: String,
    pub description: String,
    pub seasons: i32,
    pub episodes: i32,
    pub genre: String,
    pub status: String,
    pub current_episode: i32,
    pub score: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Field values for a series that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeries {
    pub title: String,
    pub description: String,
    pub seasons: i32,
    pub episodes: i32,
    pub genre: String,
    pub status: String,
    pub current_episode: i32,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("current_episode must not be negative (got {0})")]
    Negative(i32),

    #[error("current_episode {current} exceeds total episodes {total}")]
    BeyondTotal { current: i32, total: i32 },
}

fn check_progress(current: i32, total: i32) -> Result<(), ProgressError> {
    if current < 0 {
        return Err(ProgressError::Negative(current));
    }
    if current > total {
        return Err(ProgressError::BeyondTotal { current, total });
    }
    Ok(())
}

impl Series {
    /// Moves progress forward by one episode.
    ///
    /// Returns `false` without touching the record when the last episode
    /// has already been reached.
    pub fn advance_episode(&mut self) -> bool {
        if self.current_episode < self.episodes {
            self.current_episode += 1;
            true
        } else {
            false
        }
    }

    pub fn upvote(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    pub fn downvote(&mut self) {
        self.score = self.score.saturating_sub(1);
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn check_progress(&self) -> Result<(), ProgressError> {
        check_progress(self.current_episode, self.episodes)
    }
}

impl NewSeries {
    pub fn check_progress(&self) -> Result<(), ProgressError> {
        check_progress(self.current_episode, self.episodes)
    }
}

/// Request body for creating or replacing a series.
///
/// Every field is optional: on create the gaps are filled with defaults,
/// on replace only the supplied fields overwrite the stored record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub seasons: Option<i32>,
    pub episodes: Option<i32>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub current_episode: Option<i32>,
    pub score: Option<i32>,
}

impl SeriesPayload {
    #[must_use]
    pub fn into_new_series(self) -> NewSeries {
        let status = self
            .status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());

        NewSeries {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            seasons: self.seasons.unwrap_or(0),
            episodes: self.episodes.unwrap_or(0),
            genre: self.genre.unwrap_or_default(),
            status,
            current_episode: self.current_episode.unwrap_or(0),
            score: self.score.unwrap_or(0),
        }
    }

    /// Overlays the supplied fields onto an existing record.
    pub fn apply_to(self, series: &mut Series) {
        if let Some(title) = self.title {
            series.title = title;
        }
        if let Some(description) = self.description {
            series.description = description;
        }
        if let Some(seasons) = self.seasons {
            series.seasons = seasons;
        }
        if let Some(episodes) = self.episodes {
            series.episodes = episodes;
        }
        if let Some(genre) = self.genre {
            series.genre = genre;
        }
        if let Some(status) = self.status {
            series.status = status;
        }
        if let Some(current_episode) = self.current_episode {
            series.current_episode = current_episode;
        }
        if let Some(score) = self.score {
            series.score = score;
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusPayload {
    pub status: String,
}
