use std::fmt::Write as _;

use kb_api::limits::{enforce_max_message_size, MAX_MESSAGE_BYTES};
use kb_api::status::StatusCode;
use memchr::memmem::Finder;
use tokio::io::{AsyncRead, AsyncReadExt};

const HEAD_END: &[u8] = b"\r\n\r\n";
const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Request {
    pub fn get(path: &str) -> Self {
        Self { method: "GET".into(), path: path.into(), headers: vec![], body: vec![] }
    }

    pub fn route(&self) -> &str {
        self.path.split('?').next().unwrap_or("")
    }

    pub fn query(&self) -> Option<&str> {
        self.path.split_once('?').map(|(_, q)| q)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    fn content_length(&self) -> Result<usize, StatusCode> {
        match self.header("content-length") {
            Some(v) => v.parse().map_err(|_| StatusCode::BadRequest),
            None => Ok(0),
        }
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Read one request: the head up to the blank line, then `content-length`
/// bytes of body. The whole message may not exceed `MAX_MESSAGE_BYTES`.
pub async fn read_request<S>(stream: &mut S) -> Result<Request, StatusCode>
where
    S: AsyncRead + Unpin,
{
    let (head, mut body) = read_head(stream).await?;
    let mut req = parse_head(&head)?;

    let len = req.content_length()?;
    enforce_max_message_size(head.len() + len).map_err(|_| StatusCode::RequestEntityTooLarge)?;
    if body.len() < len {
        let missing = (len - body.len()) as u64;
        stream
            .take(missing)
            .read_to_end(&mut body)
            .await
            .map_err(|_| StatusCode::InternalServerError)?;
        if body.len() < len {
            return Err(StatusCode::BadRequest);
        }
    }
    body.truncate(len);
    req.body = body;
    Ok(req)
}

// Returns the head (terminator included) and whatever body bytes came with it.
async fn read_head<S>(stream: &mut S) -> Result<(Vec<u8>, Vec<u8>), StatusCode>
where
    S: AsyncRead + Unpin,
{
    let finder = Finder::new(HEAD_END);
    let mut buf = Vec::with_capacity(4096);
    let mut chunk = [0u8; 2048];
    loop {
        let scanned = buf.len().saturating_sub(HEAD_END.len() - 1);
        let n = stream.read(&mut chunk).await.map_err(|_| StatusCode::InternalServerError)?;
        if n == 0 {
            return Err(StatusCode::BadRequest);
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.len() > MAX_MESSAGE_BYTES {
            return Err(StatusCode::RequestEntityTooLarge);
        }
        if let Some(pos) = finder.find(&buf[scanned..]) {
            let rest = buf.split_off(scanned + pos + HEAD_END.len());
            return Ok((buf, rest));
        }
    }
}

fn parse_head(head: &[u8]) -> Result<Request, StatusCode> {
    let text = std::str::from_utf8(head).map_err(|_| StatusCode::BadRequest)?;
    let mut lines = text.split("\r\n").filter(|l| !l.is_empty());

    let mut start = lines.next().unwrap_or("").split_whitespace();
    let (Some(method), Some(path)) = (start.next(), start.next()) else {
        return Err(StatusCode::BadRequest);
    };

    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    Ok(Request { method: method.to_string(), path: path.to_string(), headers, body: vec![] })
}

#[derive(Debug)]
pub struct Response {
    pub code: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn empty(code: StatusCode) -> Self {
        Self { code, headers: vec![], body: vec![] }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Serialize as an HTTP/1.1 message; `content-length` is always derived
    /// from the body and the connection is closed after it.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut head = String::with_capacity(256);
        let _ = write!(
            head,
            "HTTP/1.1 {} {}\r\nserver: kbd/0.1\r\ndate: {}\r\nconnection: close\r\n",
            self.code.as_u16(),
            self.code.reason(),
            httpdate::fmt_http_date(std::time::SystemTime::now()),
        );
        let content_type = self.header("content-type").unwrap_or(DEFAULT_CONTENT_TYPE);
        let _ = write!(head, "content-type: {content_type}\r\n");
        for (k, v) in &self.headers {
            if !k.eq_ignore_ascii_case("content-type") && !k.eq_ignore_ascii_case("content-length") {
                let _ = write!(head, "{k}: {v}\r\n");
            }
        }
        let _ = write!(head, "content-length: {}\r\n\r\n", self.body.len());

        let mut out = head.into_bytes();
        out.extend_from_slice(&self.body);
        out
    }
}

pub fn make_empty_response(code: StatusCode) -> String {
    String::from_utf8(Response::empty(code).into_bytes()).unwrap_or_default()
}
