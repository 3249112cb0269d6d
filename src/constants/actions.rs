//! Solana Actions protocol constants.

/// Headers every action endpoint must return so that wallets and Blink
/// clients can call it cross-origin.
pub const ACTIONS_CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET,POST,PUT,OPTIONS"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type, Authorization, Content-Encoding, Accept-Encoding, X-Accept-Action-Version, X-Accept-Blockchain-Ids",
    ),
    (
        "Access-Control-Expose-Headers",
        "X-Action-Version, X-Blockchain-Ids",
    ),
];

/// Route prefix under which blink actions are served.
pub const ACTIONS_PATH_PREFIX: &str = "/api/actions/network";

/// Default icon path, resolved against the request host.
pub const DEFAULT_ACTION_ICON_PATH: &str = "/icon.png";

/// Label of the transaction button rendered by Blink clients.
pub const ACTION_BUTTON_LABEL: &str = "Join Now";
