pub mod http_like;
