//! Blocking client for the platform REST API.
//!
//! One client per run, holding the endpoint and a bearer token. Fetches
//! deserialize straight into the record model; create/update calls build
//! their bodies in wire mode (schedule instants as RFC 3339 UTC).

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::api::{AssignmentId, CourseId, GroupId};
use crate::canvas::error::{CanvasError, CanvasResult};
use crate::models::{Assignment, AssignmentGroup};

pub struct CanvasClient {
    http: Client,
    base_url: String,
}

impl CanvasClient {
    /// Build a client for `base_url` authenticating with `token`.
    pub fn new(base_url: impl Into<String>, token: &str) -> CanvasResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| CanvasError::InvalidToken)?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(CanvasError::Client)?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn fetch_assignment(
        &self,
        course: CourseId,
        assignment: AssignmentId,
    ) -> CanvasResult<Assignment> {
        self.get(&format!(
            "/api/v1/courses/{}/assignments/{}",
            course, assignment
        ))
    }

    pub fn fetch_assignment_group(
        &self,
        course: CourseId,
        group: GroupId,
        include_assignments: bool,
    ) -> CanvasResult<AssignmentGroup> {
        self.get(&format!(
            "/api/v1/courses/{}/assignment_groups/{}{}",
            course,
            group,
            include_query(include_assignments)
        ))
    }

    pub fn fetch_assignment_groups(
        &self,
        course: CourseId,
        include_assignments: bool,
    ) -> CanvasResult<Vec<AssignmentGroup>> {
        self.get(&format!(
            "/api/v1/courses/{}/assignment_groups{}",
            course,
            include_query(include_assignments)
        ))
    }

    /// Create (id 0) or update a group; returns the server-side ID.
    pub fn push_group(&self, group: &AssignmentGroup, course: CourseId) -> CanvasResult<GroupId> {
        let body = serde_json::to_value(group)?;
        let (method, url) = if group.id == 0 {
            (
                "POST",
                self.url(&format!("/api/v1/courses/{}/assignment_groups", course)),
            )
        } else {
            (
                "PUT",
                self.url(&format!(
                    "/api/v1/courses/{}/assignment_groups/{}",
                    course, group.id
                )),
            )
        };
        let saved: AssignmentGroup = self.send(method, url, &body)?;
        Ok(GroupId::new(saved.id))
    }

    /// Create (id 0) or update an assignment; returns the server-side ID.
    /// The platform expects assignment bodies wrapped in an
    /// `{"assignment": …}` object.
    pub fn push_assignment(
        &self,
        asst: &Assignment,
        course: CourseId,
    ) -> CanvasResult<AssignmentId> {
        let body = json!({ "assignment": assignment_wire_body(asst)? });
        let (method, url) = if asst.id == 0 {
            (
                "POST",
                self.url(&format!("/api/v1/courses/{}/assignments", course)),
            )
        } else {
            (
                "PUT",
                self.url(&format!(
                    "/api/v1/courses/{}/assignments/{}",
                    course, asst.id
                )),
            )
        };
        let saved: Assignment = self.send(method, url, &body)?;
        Ok(AssignmentId::new(saved.id))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> CanvasResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let request = self.http.get(&url);
        self.execute("GET", url, request)
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: String,
        body: &Value,
    ) -> CanvasResult<T> {
        debug!(%url, method, "sending");
        let request = match method {
            "PUT" => self.http.put(&url),
            _ => self.http.post(&url),
        }
        .json(body);
        self.execute(method, url, request)
    }

    fn execute<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: String,
        request: RequestBuilder,
    ) -> CanvasResult<T> {
        let response = request.send().map_err(|source| CanvasError::Transport {
            method,
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(CanvasError::Status {
                method,
                url,
                status,
            });
        }
        response
            .json()
            .map_err(|source| CanvasError::Decode { url, source })
    }
}

fn include_query(include_assignments: bool) -> &'static str {
    if include_assignments {
        "?include=assignments"
    } else {
        ""
    }
}

/// Wire-mode body for an assignment: the display-form serialization with
/// the four schedule instants rewritten as RFC 3339 UTC timestamps. This
/// is the only place the wire form is applied; display dumps use the
/// types' own serde impls.
pub fn assignment_wire_body(asst: &Assignment) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(asst)?;
    if let Value::Object(fields) = &mut value {
        let instants = [
            ("due_at", asst.due_at),
            ("lock_at", asst.lock_at),
            ("unlock_at", asst.unlock_at),
            ("peer_reviews_assign_at", asst.peer_reviews_assign_at),
        ];
        for (key, instant) in instants {
            if let Some(instant) = instant {
                fields.insert(key.to_string(), Value::String(instant.to_wire()));
            }
        }
    }
    Ok(value)
}
