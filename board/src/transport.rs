//! Blocking HTTP transport backed by ureq.

use board_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use ureq::http::Response;
use ureq::{Agent, Body};

/// Executes requests with a shared ureq agent.
///
/// Status codes are returned as data (`http_status_as_error(false)`), so the
/// codec decides what counts as failure. Only connection-level problems
/// become `ApiError::Transport`.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    fn send(&self, req: HttpRequest) -> Result<Response<Body>, ureq::Error> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = req;

        match method {
            HttpMethod::Get | HttpMethod::Delete => {
                let mut builder = if method == HttpMethod::Get {
                    self.agent.get(&path)
                } else {
                    self.agent.delete(&path)
                };
                for (key, value) in &headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post | HttpMethod::Put => {
                let mut builder = if method == HttpMethod::Post {
                    self.agent.post(&path)
                } else {
                    self.agent.put(&path)
                };
                for (key, value) in &headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut response = self.send(req).map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use board_core::{Board, BoardError, PostId, PostInput, PostsClient};

    use super::*;

    /// Serve the mock backend on a random port from a background thread.
    fn start_server() -> String {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener).await
            })
            .unwrap();
        });

        format!("http://{addr}")
    }

    #[test]
    fn board_lifecycle_over_ureq() {
        let base_url = start_server();
        let answer = Rc::new(Cell::new(true));
        let confirm = {
            let answer = Rc::clone(&answer);
            move |_: &str| answer.get()
        };
        let mut board = Board::mount(PostsClient::new(&base_url), UreqTransport::new(), confirm);
        assert!(board.state().posts.is_empty());
        assert!(board.state().error.is_none());

        // POST only succeeds if the codec's content-type header is forwarded.
        board.create("hi");
        assert!(board.state().error.is_none());
        assert_eq!(board.state().posts.len(), 1);
        assert_eq!(board.state().posts[0].text, "hi");
        let id = board.state().posts[0].id.clone();
        assert_eq!(id, PostId::from(1));

        board.begin_edit(id.clone(), "hi");
        board.set_editing_text("yo");
        board.commit_edit();
        assert!(board.state().editing_id.is_none());
        assert_eq!(board.state().posts[0].text, "yo");

        answer.set(false);
        board.remove(&id);
        assert_eq!(board.state().posts.len(), 1);

        answer.set(true);
        board.remove(&id);
        assert!(board.state().posts.is_empty());
        assert!(board.state().error.is_none());

        // 404 on the second delete.
        board.remove(&id);
        assert_eq!(board.state().error, Some(BoardError::Delete));
        assert!(!board.state().loading);
    }

    #[test]
    fn status_codes_come_back_as_data() {
        let base_url = start_server();
        let client = PostsClient::new(&base_url);
        let mut transport = UreqTransport::new();

        let created = transport
            .execute(client.build_create_post(&PostInput::new("hello")).unwrap())
            .unwrap();
        assert_eq!(created.status, 201);
        let post: serde_json::Value = serde_json::from_str(&created.body).unwrap();
        assert_eq!(post["text"], "hello");

        let missing = transport
            .execute(client.build_delete_post(&PostId::from(99)))
            .unwrap();
        assert_eq!(missing.status, 404);
        assert!(matches!(client.parse_delete_post(missing), Err(ApiError::NotFound)));
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let client = PostsClient::new(&format!("http://{addr}"));
        let err = UreqTransport::new().execute(client.build_list_posts()).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
