//! Client layer: endpoint normalization, authentication, and the send path.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    AccessToken, Password, RawHttpResponse, SendOptions, SendResponse, SmsMessage, StatusCode,
    Username, ValidationError,
};

const DEFAULT_ENDPOINT: &str = "https://api.websms.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("websms-rust/", env!("CARGO_PKG_VERSION"));

/// Path prefix shared by both message sub-endpoints.
const SMSMESSAGING_PREFIX: &str = "json/smsmessaging";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    content_type: Option<String>,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        body: &'a serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        body: &'a serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let request = self.client.post(url).json(body);
            let request = match auth {
                Auth::UsernamePassword { username, password } => {
                    request.basic_auth(username.as_str(), Some(password.as_str()))
                }
                Auth::AccessToken(token) => request.bearer_auth(token.as_str()),
            };
            let response = request.send().await?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                content_type,
                body,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Normalized gateway base URL.
///
/// Accepts a raw URL string, strips trailing slashes, and prepends `https://`
/// when no recognized scheme is present. The host must be at least 4
/// characters; this guards against obviously malformed input, not full URL
/// validity.
pub struct Endpoint {
    base: String,
    scheme: String,
    host: String,
    port: u16,
}

impl Endpoint {
    /// Parse and normalize a gateway base URL.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "url" });
        }

        let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_owned()
        } else {
            format!("https://{trimmed}")
        };

        let parsed = Url::parse(&normalized).map_err(|_| ValidationError::InvalidUrl {
            input: raw.clone(),
        })?;
        let host = parsed
            .host_str()
            .ok_or_else(|| ValidationError::InvalidUrl { input: raw.clone() })?
            .to_owned();
        if host.len() < 4 {
            return Err(ValidationError::HostTooShort { host });
        }
        let port = parsed
            .port_or_known_default()
            .unwrap_or(if parsed.scheme() == "http" { 80 } else { 443 });

        Ok(Self {
            base: normalized,
            scheme: parsed.scheme().to_owned(),
            host,
            port,
        })
    }

    /// Normalized base URL (scheme, host, optional port and path prefix; no
    /// trailing slash).
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, or the scheme default (443 for https, 80 for http).
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Full URL for a `smsmessaging` sub-endpoint (`text` or `binary`).
    fn url_for(&self, sub_endpoint: &str) -> String {
        format!("{}/{}/{}", self.base, SMSMESSAGING_PREFIX, sub_endpoint)
    }
}

#[derive(Debug, Clone)]
/// Authentication credentials, selected at construction time.
///
/// The two modes are mutually exclusive: username/password is sent as HTTP
/// basic auth, an access token as an `Authorization: Bearer` header.
pub enum Auth {
    /// HTTP basic authentication.
    UsernamePassword { username: Username, password: Password },
    /// `Authorization: Bearer <token>`.
    AccessToken(AccessToken),
}

impl Auth {
    /// Create [`Auth::UsernamePassword`] and validate that both parts are
    /// non-empty.
    pub fn username_password(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::UsernamePassword {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Create [`Auth::AccessToken`] and validate that the token is non-empty
    /// after trimming.
    pub fn access_token(token: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::AccessToken(AccessToken::new(token)?))
    }

    /// Diagnostic text for an HTTP 401, naming the auth mode in use.
    fn authorization_failed_message(&self) -> &'static str {
        match self {
            Self::UsernamePassword { .. } => {
                "basic authentication was rejected by the gateway; check username and password"
            }
            Self::AccessToken(_) => {
                "bearer access token was rejected by the gateway; check the access token"
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`WebsmsClient`].
///
/// The five variants are kept distinct so callers can tell apart caller
/// misuse, transport problems, credential problems, malformed responses, and
/// business-level rejections.
pub enum WebsmsError {
    /// Invalid caller input, rejected before any network activity.
    #[error("parameter validation failed: {0}")]
    Parameter(#[from] ValidationError),

    /// Transport-level failure such as DNS, connect, or the TLS handshake
    /// (`status: None`), or an HTTP status other than exactly 200
    /// (`status: Some`).
    #[error("http connection failed (status: {status:?})")]
    Connection {
        status: Option<u16>,
        body: Option<String>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// HTTP 401: the gateway rejected the credentials. Distinguished from
    /// [`WebsmsError::Connection`] because it implies a credentials problem,
    /// not a network problem.
    #[error("authorization failed: {message}")]
    AuthorizationFailed { status: u16, message: String },

    /// A response was received, but it is not the JSON the gateway is
    /// expected to produce.
    #[error("unexpected response content type: {content_type:?}")]
    UnknownResponse { content_type: String, body: String },

    /// Well-formed JSON response with a business status code outside the
    /// success range `2000..=2001`.
    #[error("API error {status_code}: {status_message}")]
    Api {
        status_code: StatusCode,
        status_message: String,
    },
}

/// Builder for [`WebsmsClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or
/// the underlying HTTP client.
pub struct WebsmsClientBuilder {
    auth: Auth,
    endpoint: String,
    timeout: Duration,
    user_agent: String,
    verbose: bool,
    accept_invalid_certs: bool,
    test_mode: bool,
    configure_http: Option<ConfigureHttp>,
}

type ConfigureHttp = Box<dyn FnOnce(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send>;

impl std::fmt::Debug for WebsmsClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebsmsClientBuilder")
            .field("auth", &self.auth)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("verbose", &self.verbose)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("test_mode", &self.test_mode)
            .finish_non_exhaustive()
    }
}

impl WebsmsClientBuilder {
    /// Create a builder with the production endpoint and default transport
    /// settings (10 second timeout, TLS verification on, test mode off).
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_owned(),
            verbose: false,
            accept_invalid_certs: false,
            test_mode: false,
            configure_http: None,
        }
    }

    /// Override the gateway base URL. The value is normalized on
    /// [`WebsmsClientBuilder::build`]: trailing slashes are stripped and
    /// `https://` is prepended when no scheme is given.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable verbose connection logging in the underlying HTTP client.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Disable TLS certificate verification. Verification stays on unless
    /// this is called with `true`.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Mark every request body with `"test": true` so the gateway simulates
    /// delivery instead of dispatching.
    pub fn test_mode(mut self, test: bool) -> Self {
        self.test_mode = test;
        self
    }

    /// Pass arbitrary settings through to the underlying
    /// [`reqwest::ClientBuilder`].
    ///
    /// The hook runs before the explicit builder settings are applied, so
    /// `timeout`, `user_agent`, `verbose`, and the TLS toggle always win over
    /// whatever the hook configured.
    pub fn configure_http(
        mut self,
        configure: impl FnOnce(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + 'static,
    ) -> Self {
        self.configure_http = Some(Box::new(configure));
        self
    }

    /// Build a [`WebsmsClient`].
    pub fn build(self) -> Result<WebsmsClient, WebsmsError> {
        let endpoint = Endpoint::new(self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(configure) = self.configure_http {
            builder = configure(builder);
        }
        builder = builder
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .connection_verbose(self.verbose);
        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|err| WebsmsError::Connection {
            status: None,
            body: None,
            source: Some(Box::new(err)),
        })?;

        Ok(WebsmsClient {
            auth: self.auth,
            endpoint,
            test: self.test_mode,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level client for the websms.com SMS gateway.
///
/// One [`WebsmsClient::send`] call performs exactly one HTTP POST to
/// `{base}/json/smsmessaging/{text|binary}` and either returns the decoded
/// gateway reply or one of the [`WebsmsError`] variants. Nothing is retried;
/// the caller owns retry policy.
///
/// The client is immutable after construction. To derive a sibling with test
/// mode flipped, use [`WebsmsClient::with_test_mode`]; the original instance
/// is unaffected, so sharing a client across tasks is safe.
pub struct WebsmsClient {
    auth: Auth,
    endpoint: Endpoint,
    test: bool,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for WebsmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebsmsClient")
            .field("auth", &self.auth)
            .field("endpoint", &self.endpoint)
            .field("test", &self.test)
            .finish_non_exhaustive()
    }
}

impl WebsmsClient {
    /// Create a client for the production endpoint with default settings.
    ///
    /// For more customization, use [`WebsmsClient::builder`].
    pub fn new(auth: Auth) -> Result<Self, WebsmsError> {
        Self::builder(auth).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> WebsmsClientBuilder {
        WebsmsClientBuilder::new(auth)
    }

    /// Copy-on-set test mode: returns a client that marks every request with
    /// `"test": <test>`.
    pub fn with_test_mode(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Whether outgoing requests carry `"test": true`.
    pub fn test_mode(&self) -> bool {
        self.test
    }

    /// The normalized endpoint this client talks to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Submit an SMS message to the gateway.
    ///
    /// Errors:
    /// - [`WebsmsError::Parameter`] for invalid domain values (never reaches
    ///   the network),
    /// - [`WebsmsError::Connection`] for transport failures and any HTTP
    ///   status other than exactly 200,
    /// - [`WebsmsError::AuthorizationFailed`] for HTTP 401,
    /// - [`WebsmsError::UnknownResponse`] when the response is not JSON,
    /// - [`WebsmsError::Api`] when the gateway rejects the message with a
    ///   business status code outside `2000..=2001`.
    pub async fn send(
        &self,
        message: &SmsMessage,
        options: &SendOptions,
    ) -> Result<SendResponse, WebsmsError> {
        let url = self.endpoint.url_for(message.endpoint());
        let body = crate::transport::encode_send_json(message, options, self.test);

        let response = self
            .http
            .post_json(&url, &self.auth, &body)
            .await
            .map_err(|err| WebsmsError::Connection {
                status: None,
                body: None,
                source: Some(err),
            })?;
        let HttpResponse {
            status,
            content_type,
            body,
        } = response;

        if status == 401 {
            return Err(WebsmsError::AuthorizationFailed {
                status,
                message: self.auth.authorization_failed_message().to_owned(),
            });
        }
        // Exactly 200 is the only accepted transport status. The gateway
        // never answers the send endpoints with 201/204, so anything above
        // 200 is a failure; this boundary is intentional.
        if status > 200 {
            let body = if body.trim().is_empty() { None } else { Some(body) };
            return Err(WebsmsError::Connection {
                status: Some(status),
                body,
                source: None,
            });
        }

        let content_type_value = content_type.clone().unwrap_or_default();
        if !content_type_value
            .to_ascii_lowercase()
            .contains("application/json")
        {
            return Err(WebsmsError::UnknownResponse {
                content_type: content_type_value,
                body,
            });
        }

        let decoded = match crate::transport::decode_send_json_response(&body) {
            Ok(decoded) => decoded,
            // The gateway claimed JSON but the body is not decodable.
            Err(_) => {
                return Err(WebsmsError::UnknownResponse {
                    content_type: content_type_value,
                    body,
                });
            }
        };

        if !decoded.status_code.is_success() {
            return Err(WebsmsError::Api {
                status_code: decoded.status_code,
                status_message: decoded.status_message,
            });
        }

        Ok(SendResponse {
            status_code: decoded.status_code,
            status_message: decoded.status_message,
            transfer_id: decoded.transfer_id,
            client_message_id: decoded.client_message_id,
            sms_count: decoded.sms_count,
            http: RawHttpResponse {
                status,
                content_type,
                body,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{MaxSmsPerMessage, MessageContent, Recipient};

    use super::*;

    #[derive(Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    struct FakeTransportState {
        last_url: Option<String>,
        last_auth: Option<Auth>,
        last_body: Option<serde_json::Value>,
        response_status: u16,
        response_content_type: Option<String>,
        response_body: String,
    }

    impl FakeTransport {
        fn new(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_auth: None,
                    last_body: None,
                    response_status: status,
                    response_content_type: content_type.map(str::to_owned),
                    response_body: body.into(),
                })),
            }
        }

        fn json(status: u16, body: impl Into<String>) -> Self {
            Self::new(status, Some("application/json; charset=utf-8"), body)
        }

        fn last_url(&self) -> Option<String> {
            self.state.lock().unwrap().last_url.clone()
        }

        fn last_auth(&self) -> Option<Auth> {
            self.state.lock().unwrap().last_auth.clone()
        }

        fn last_body(&self) -> serde_json::Value {
            self.state.lock().unwrap().last_body.clone().unwrap()
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            auth: &'a Auth,
            body: &'a serde_json::Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, content_type, response_body) = {
                    let mut state = self.state.lock().unwrap();
                    state.last_url = Some(url.to_owned());
                    state.last_auth = Some(auth.clone());
                    state.last_body = Some(body.clone());
                    (
                        state.response_status,
                        state.response_content_type.clone(),
                        state.response_body.clone(),
                    )
                };
                Ok(HttpResponse {
                    status,
                    content_type,
                    body: response_body,
                })
            })
        }
    }

    struct RefusedTransport;

    impl HttpTransport for RefusedTransport {
        fn post_json<'a>(
            &'a self,
            _url: &'a str,
            _auth: &'a Auth,
            _body: &'a serde_json::Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                Err::<HttpResponse, _>(Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )) as Box<dyn StdError + Send + Sync>)
            })
        }
    }

    fn make_client(auth: Auth, http: Arc<dyn HttpTransport>) -> WebsmsClient {
        WebsmsClient {
            auth,
            endpoint: Endpoint::new("https://example.invalid").unwrap(),
            test: false,
            http,
        }
    }

    fn token_auth() -> Auth {
        Auth::access_token("test-token").unwrap()
    }

    fn text_message() -> SmsMessage {
        SmsMessage::text(
            vec![Recipient::new("4367612345678").unwrap()],
            MessageContent::new("hello").unwrap(),
        )
        .unwrap()
    }

    const OK_BODY: &str = r#"{"statusCode":2000,"statusMessage":"OK","transferId":"0060e0b7d7","smsCount":1}"#;

    #[test]
    fn endpoint_prepends_https_when_scheme_is_missing() {
        let endpoint = Endpoint::new("api.websms.com").unwrap();
        assert_eq!(endpoint.base(), "https://api.websms.com");
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host(), "api.websms.com");
        assert_eq!(endpoint.port(), 443);
    }

    #[test]
    fn endpoint_strips_trailing_slashes() {
        let endpoint = Endpoint::new("https://api.websms.com///").unwrap();
        assert_eq!(endpoint.base(), "https://api.websms.com");
    }

    #[test]
    fn endpoint_keeps_explicit_scheme_port_and_path_prefix() {
        let endpoint = Endpoint::new("http://gateway.local:8080/gw/").unwrap();
        assert_eq!(endpoint.base(), "http://gateway.local:8080/gw");
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.host(), "gateway.local");
        assert_eq!(endpoint.port(), 8080);
    }

    #[test]
    fn endpoint_defaults_http_port_to_80() {
        let endpoint = Endpoint::new("http://gateway.local").unwrap();
        assert_eq!(endpoint.port(), 80);
    }

    #[test]
    fn endpoint_rejects_short_host() {
        assert!(matches!(
            Endpoint::new("https://ab"),
            Err(ValidationError::HostTooShort { .. })
        ));
        assert!(Endpoint::new("").is_err());
    }

    #[test]
    fn auth_constructors_validate_inputs() {
        assert!(Auth::access_token("   ").is_err());
        assert!(Auth::username_password("", "pass").is_err());
        assert!(Auth::username_password("user", "").is_err());
        assert!(Auth::username_password("user", "pass").is_ok());
    }

    #[tokio::test]
    async fn send_posts_to_text_sub_endpoint_and_parses_ok_response() {
        let transport = FakeTransport::json(200, OK_BODY);
        let client = make_client(token_auth(), Arc::new(transport.clone()));

        let response = client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap();
        assert_eq!(response.status_code, StatusCode::new(2000));
        assert_eq!(response.status_message, "OK");
        assert_eq!(response.transfer_id.as_deref(), Some("0060e0b7d7"));
        assert_eq!(response.sms_count, Some(1));
        assert_eq!(response.http.status, 200);
        assert_eq!(response.http.body, OK_BODY);

        assert_eq!(
            transport.last_url().as_deref(),
            Some("https://example.invalid/json/smsmessaging/text")
        );
        let body = transport.last_body();
        assert_eq!(body["messageContent"], "hello");
        assert_eq!(body["test"], serde_json::json!(false));
        assert!(matches!(
            transport.last_auth(),
            Some(Auth::AccessToken(token)) if token.as_str() == "test-token"
        ));
    }

    #[tokio::test]
    async fn send_posts_binary_messages_to_binary_sub_endpoint() {
        let transport = FakeTransport::json(200, OK_BODY);
        let client = make_client(token_auth(), Arc::new(transport.clone()));
        let message = SmsMessage::binary(
            vec![Recipient::new("4367612345678").unwrap()],
            vec![vec![0x05, 0x00]],
            false,
        )
        .unwrap();

        client.send(&message, &SendOptions::default()).await.unwrap();

        assert_eq!(
            transport.last_url().as_deref(),
            Some("https://example.invalid/json/smsmessaging/binary")
        );
        let body = transport.last_body();
        assert_eq!(body["userDataHeaderPresent"], serde_json::json!(false));
    }

    #[tokio::test]
    async fn send_forwards_basic_auth_credentials() {
        let transport = FakeTransport::json(200, OK_BODY);
        let client = make_client(
            Auth::username_password("user", "pass").unwrap(),
            Arc::new(transport.clone()),
        );

        client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap();

        assert!(matches!(
            transport.last_auth(),
            Some(Auth::UsernamePassword { username, password })
                if username.as_str() == "user" && password.as_str() == "pass"
        ));
    }

    #[tokio::test]
    async fn send_includes_max_sms_per_message_when_set() {
        let transport = FakeTransport::json(200, OK_BODY);
        let client = make_client(token_auth(), Arc::new(transport.clone()));
        let options = SendOptions {
            max_sms_per_message: Some(MaxSmsPerMessage::new(4).unwrap()),
        };

        client.send(&text_message(), &options).await.unwrap();

        let body = transport.last_body();
        assert_eq!(body["maxSmsPerMessage"], serde_json::json!(4));
    }

    #[tokio::test]
    async fn test_mode_is_copy_on_set_and_reflected_in_the_body() {
        let transport = FakeTransport::json(200, OK_BODY);
        let client = make_client(token_auth(), Arc::new(transport.clone()));

        let test_client = client.clone().with_test_mode(true);
        assert!(test_client.test_mode());
        assert!(!client.test_mode());

        test_client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap();
        assert_eq!(transport.last_body()["test"], serde_json::json!(true));

        let reverted = test_client.with_test_mode(false);
        reverted
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap();
        assert_eq!(transport.last_body()["test"], serde_json::json!(false));
    }

    #[tokio::test]
    async fn send_maps_business_error_to_api_error() {
        let body = r#"{"statusCode":4003,"statusMessage":"Invalid sender"}"#;
        let transport = FakeTransport::json(200, body);
        let client = make_client(token_auth(), Arc::new(transport));

        let err = client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap_err();
        match err {
            WebsmsError::Api {
                status_code,
                status_message,
            } => {
                assert_eq!(status_code.as_i32(), 4003);
                assert_eq!(status_message, "Invalid sender");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_maps_401_to_authorization_failed_with_mode_specific_text() {
        let transport = FakeTransport::json(401, "");
        let client = make_client(token_auth(), Arc::new(transport));
        let err = client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap_err();
        let token_message = match err {
            WebsmsError::AuthorizationFailed { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("access token"), "got: {message}");
                message
            }
            other => panic!("unexpected error: {other:?}"),
        };

        let transport = FakeTransport::json(401, "");
        let client = make_client(
            Auth::username_password("user", "pass").unwrap(),
            Arc::new(transport),
        );
        let err = client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap_err();
        match err {
            WebsmsError::AuthorizationFailed { message, .. } => {
                assert!(message.contains("username and password"), "got: {message}");
                assert_ne!(message, token_message);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_maps_non_200_status_to_connection_error() {
        let transport = FakeTransport::new(500, Some("text/plain"), "oops");
        let client = make_client(token_auth(), Arc::new(transport));

        let err = client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WebsmsError::Connection {
                status: Some(500),
                body: Some(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn send_treats_statuses_above_200_as_failures() {
        // 201/204 would conventionally be successes, but the gateway only
        // ever answers 200 on this path.
        for status in [201, 204, 302] {
            let transport = FakeTransport::new(status, None, "");
            let client = make_client(token_auth(), Arc::new(transport));
            let err = client
                .send(&text_message(), &SendOptions::default())
                .await
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    WebsmsError::Connection {
                        status: Some(s),
                        body: None,
                        ..
                    } if s == status
                ),
                "status {status} should map to a connection error"
            );
        }
    }

    #[tokio::test]
    async fn send_maps_non_json_content_type_to_unknown_response() {
        let transport = FakeTransport::new(200, Some("text/html"), "<html>maintenance</html>");
        let client = make_client(token_auth(), Arc::new(transport));

        let err = client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap_err();
        match err {
            WebsmsError::UnknownResponse { content_type, body } => {
                assert_eq!(content_type, "text/html");
                assert_eq!(body, "<html>maintenance</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_maps_undecodable_json_body_to_unknown_response() {
        let transport = FakeTransport::json(200, "{ not json }");
        let client = make_client(token_auth(), Arc::new(transport));

        let err = client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, WebsmsError::UnknownResponse { .. }));
    }

    #[tokio::test]
    async fn send_maps_connection_refusal_to_connection_error_without_status() {
        let client = make_client(token_auth(), Arc::new(RefusedTransport));

        let err = client
            .send(&text_message(), &SendOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WebsmsError::Connection {
                status: None,
                body: None,
                source: Some(_),
            }
        ));
    }

    #[test]
    fn builder_applies_endpoint_and_test_mode() {
        let client = WebsmsClient::builder(token_auth())
            .endpoint("msgsvc.example.org/gw/")
            .test_mode(true)
            .build()
            .unwrap();
        assert_eq!(client.endpoint().base(), "https://msgsvc.example.org/gw");
        assert!(client.test_mode());
    }

    #[test]
    fn client_debug_output_names_endpoint_and_skips_the_transport() {
        let client = make_client(token_auth(), Arc::new(FakeTransport::json(200, OK_BODY)));
        let debug = format!("{client:?}");
        assert!(debug.starts_with("WebsmsClient"), "got: {debug}");
        assert!(debug.contains("example.invalid"), "got: {debug}");
    }

    #[test]
    fn builder_rejects_invalid_endpoint_before_networking() {
        let err = WebsmsClient::builder(token_auth())
            .endpoint("ab")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            WebsmsError::Parameter(ValidationError::HostTooShort { .. })
        ));
    }

    #[test]
    fn builder_passthrough_configuration_is_accepted() {
        // The hook runs before the explicit settings, so the 10 s default
        // timeout still wins over whatever it configures.
        let client = WebsmsClient::builder(token_auth())
            .configure_http(|http| http.timeout(Duration::from_secs(600)))
            .build();
        assert!(client.is_ok());
    }
}
