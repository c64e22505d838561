use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::constants::is_builtin_avatar;
use crate::errors::Result;
use crate::i18n::{translate, Locale, MessageKey};
use crate::plan::PlanInput;

use super::share_codec::{decode, encode, is_shared_plan, KEY_AVATAR};

/// Link-level key carrying the sharer's display language.
pub const KEY_LANG: &str = "lang";

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const LINE_SHARER: &str = "https://social-plugins.line.me/lineit/share";

/// A plan recovered from a shared link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedPlan {
    pub plan: PlanInput,
    /// Language of the sharer, when the link names a supported one.
    pub locale: Option<Locale>,
}

/// A URL that reproduces a plan's result when opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    url: Url,
}

impl ShareLink {
    /// Builds the link for `plan` on top of `base`. Any query already on `base`
    /// is replaced; escaping is left to `url`.
    ///
    /// Only built-in avatar paths travel in the link. An uploaded image (a data
    /// URI or foreign URL) is left out and opens as the default avatar.
    pub fn new(base: &Url, plan: &PlanInput, locale: Locale) -> Self {
        let mut fields = encode(plan);
        if !plan.avatar_ref.is_empty() && !is_builtin_avatar(&plan.avatar_ref) {
            fields.remove(KEY_AVATAR);
        }

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.query_pairs_mut()
            .extend_pairs(fields)
            .append_pair(KEY_LANG, locale.as_str());
        ShareLink { url }
    }

    pub fn parse(link: &str) -> Result<Self> {
        let url = Url::parse(link)?;
        Ok(ShareLink { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// The shared plan, or `None` when the link carries no start age and so
    /// is a plain visit rather than a shared result.
    pub fn shared_plan(&self) -> Option<SharedPlan> {
        if !is_shared_plan(self.url.query_pairs()) {
            return None;
        }
        let locale = self
            .url
            .query_pairs()
            .find(|(key, _)| key == KEY_LANG)
            .and_then(|(_, value)| value.parse().ok());
        Some(SharedPlan {
            plan: decode(self.url.query_pairs()),
            locale,
        })
    }

    /// Address that opens `network`'s share dialog for this link.
    pub fn social_url(&self, network: SocialNetwork, locale: Locale) -> String {
        network.share_url(self.as_str(), locale)
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Social networks a result can be posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Facebook,
    Line,
}

impl SocialNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "facebook",
            SocialNetwork::Line => "line",
        }
    }

    /// Label of the share button.
    pub fn label(&self, locale: Locale) -> &'static str {
        match self {
            SocialNetwork::Facebook => translate(MessageKey::ShareFacebook, locale),
            SocialNetwork::Line => translate(MessageKey::ShareLine, locale),
        }
    }

    /// Fills the network's sharer template with `link` and the localized share
    /// message, both percent-encoded.
    pub fn share_url(&self, link: &str, locale: Locale) -> String {
        let link = urlencoding::encode(link);
        let text = urlencoding::encode(translate(MessageKey::ShareMessage, locale));
        match self {
            SocialNetwork::Facebook => format!("{}?u={}&quote={}", FACEBOOK_SHARER, link, text),
            SocialNetwork::Line => format!("{}?url={}&text={}", LINE_SHARER, link, text),
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SocialNetwork {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(SocialNetwork::Facebook),
            "line" => Ok(SocialNetwork::Line),
            _ => Err(format!("Unsupported social network: {}", s)),
        }
    }
}
