/*
 *  source/todoist.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Todoist REST client - active tasks with project and section names
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

use crate::config::Config;
use crate::model::Task;
use crate::source::{SourceError, TaskSource};

const TODOIST_API: &str = "https://api.todoist.com/rest/v2";

#[derive(Debug, Clone, Deserialize)]
pub struct ApiDue {
    pub date: String,
}

/// An active task as the REST API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTask {
    pub id: String,
    pub project_id: String,
    #[serde(default)]
    pub section_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub due: Option<ApiDue>,
}

impl ApiTask {
    fn section(&self) -> Option<&str> {
        self.section_id.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Named {
    id: String,
    name: String,
}

/// Parse a due date. Date-only values land at local midnight.
fn parse_due(value: &str) -> Result<NaiveDateTime, SourceError> {
    let parsed = if value.len() > 10 {
        NaiveDateTime::parse_from_str(value.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S")
    } else {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|d| d.and_time(chrono::NaiveTime::MIN))
    };
    parsed.map_err(|source| SourceError::Time { value: value.to_string(), source })
}

/// Build domain tasks from API tasks and the id to name caches, sorted by
/// due date. Tasks without a due date are treated as due a day from `now`.
pub fn resolve_tasks(
    api_tasks: &[ApiTask],
    projects: &HashMap<String, String>,
    sections: &HashMap<String, String>,
    now: NaiveDateTime,
) -> Result<Vec<Task>, SourceError> {
    let mut tasks = Vec::with_capacity(api_tasks.len());
    for t in api_tasks {
        let due = match &t.due {
            Some(d) => parse_due(&d.date)?,
            None => now + Duration::hours(24),
        };
        tasks.push(Task {
            id: t.id.clone(),
            project: projects.get(&t.project_id).cloned().unwrap_or_default(),
            section: t.section().and_then(|s| sections.get(s)).cloned().unwrap_or_default(),
            content: t.content.clone(),
            due,
        });
    }
    tasks.sort_by(|a, b| a.due.cmp(&b.due));
    Ok(tasks)
}

#[derive(Debug, Clone)]
pub struct Todoist {
    client: Client,
    base_url: String,
    token: String,
    filter: String,
}

impl Todoist {
    pub fn new(token: impl Into<String>, filter: impl Into<String>) -> Result<Self, SourceError> {
        let token = token.into();
        if token.is_empty() {
            return Err(SourceError::MissingCredential("todoist token is empty".into()));
        }
        Ok(Self {
            client: Client::builder().timeout(std::time::Duration::from_secs(30)).build()?,
            base_url: TODOIST_API.to_string(),
            token,
            filter: filter.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let token = config
            .todoist
            .token
            .clone()
            .ok_or_else(|| SourceError::MissingCredential("todoist token not configured".into()))?;
        Self::new(token, config.tasks.filter.clone())
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SourceError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);
        let value = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(value)
    }

    /// Look up the name of every id not yet in `cache`.
    async fn fill_names<'a>(
        &self,
        kind: &str,
        ids: impl Iterator<Item = &'a str>,
        cache: &mut HashMap<String, String>,
    ) -> Result<(), SourceError> {
        for id in ids {
            if cache.contains_key(id) {
                continue;
            }
            let named: Named = self.get(&format!("{}/{}", kind, id), &[]).await?;
            cache.insert(named.id, named.name);
        }
        Ok(())
    }
}

impl TaskSource for Todoist {
    async fn tasks(&self, now: DateTime<Local>) -> Result<Vec<Task>, SourceError> {
        let api_tasks: Vec<ApiTask> = self.get("tasks", &[("filter", self.filter.as_str())]).await?;

        let mut projects = HashMap::new();
        let mut sections = HashMap::new();
        self.fill_names("projects", api_tasks.iter().map(|t| t.project_id.as_str()), &mut projects)
            .await?;
        self.fill_names("sections", api_tasks.iter().filter_map(ApiTask::section), &mut sections)
            .await?;

        let tasks = resolve_tasks(&api_tasks, &projects, &sections, now.naive_local())?;
        info!("tasks retrieved: {} ({})", tasks.len(), self.filter);
        Ok(tasks)
    }
}
