pub(crate) use crate::error::{Error, Result};
pub(crate) use bytes::Bytes;
pub(crate) use reqwest::{
    Method, Response, Url,
    multipart::{Form, Part},
};
pub(crate) use serde::{Deserialize, Serialize};
pub(crate) use serde_json::Value;

pub mod admin;
pub mod genai;

type QueryValues = Vec<(&'static str, String)>;

#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    Multipart(Form),
    Empty,
}

/// A typed ElevenLabs REST endpoint.
///
/// `PATH` is a `/`-separated template; segments starting with `:` are
/// replaced by the matching entry of [`path_params`](Self::path_params)
/// and percent-encoded as a single segment.
#[allow(async_fn_in_trait)]
pub trait ElevenLabsEndpoint {
    const PATH: &'static str;

    const METHOD: Method;

    type ResponseBody;

    fn query_params(&self) -> Option<QueryValues> {
        None
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![]
    }

    async fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody>;

    fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        let params = self.path_params();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::UnsupportedBaseUrl(base.to_string()))?;
            segments.pop_if_empty();

            for segment in Self::PATH.split('/').filter(|s| !s.is_empty()) {
                let value = params
                    .iter()
                    .find(|(placeholder, _)| *placeholder == segment)
                    .map_or(segment, |(_, id)| *id);
                segments.push(value);
            }
        }

        if let Some(query_params) = self.query_params() {
            url.query_pairs_mut().extend_pairs(query_params);
        }

        Ok(url)
    }
}
