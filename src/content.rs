//! The abstract's literal text and the blocks a story is made of.

use crate::error::PipelineError;
use folio_layout::{Flowable, Paragraph, Spacer};
use folio_markup::MarkupError;
use folio_style::{Length, ParagraphStyle, TextAlign};
use serde::{Deserialize, Serialize};

/// Written to the current working directory.
pub const OUTPUT_FILE: &str = "Pixel_Vault_Abstract.pdf";

pub const TITLE_TEXT: &str = "Pixel-Vault: A Feature-Rich NFT Marketplace";

pub const BODY_MARKUP: &str = r#"
    Pixel-Vault is a modern, full-featured NFT marketplace built with a futuristic, cyberpunk aesthetic.
    It provides a seamless experience for artists, collectors, and traders to discover, create, and trade
    digital assets on the blockchain.
    <br/><br/>
    <b>Core Features:</b>
    <br/><br/>
    <b>Modern Frontend & UI Components:</b> Built with React, Vite, and Tailwind CSS, the application offers a
    fast and responsive user interface. It leverages the <b>shadcn/ui</b> component library, which is built on
    top of Radix UI, providing a rich set of accessible and composable components. This includes elements
    like <i>Cards</i>, <i>Tabs</i>, <i>Dialogs</i>, <i>Avatars</i>, <i>Buttons</i>, and sophisticated <i>Forms</i> that contribute to a
    consistent and high-quality user experience across the platform. The application also uses
    <b>Framer Motion</b> for fluid animations and transitions, enhancing the futuristic feel of the marketplace.
    <br/><br/>
    <b>Secure Authentication:</b> Leverages Supabase for secure and easy user authentication via social
    providers like Google and GitHub.
    <br/><br/>
    <b>Comprehensive Dashboard:</b> Users have a personalized dashboard to manage their NFT collections,
    track their portfolio value, view transaction history, and customize their profiles.
    <br/><br/>
    <b>Advanced Minting Options:</b> A user-friendly minting page allows creators to upload their artwork,
    set properties like price and royalties, and choose between direct minting (paying gas fees upfront)
    or lazy minting (minting on the first sale to save on gas fees).
    <br/><br/>
    <b>Dynamic Marketplace:</b> The marketplace homepage showcases trending collections, featured NFTs, and
    real-time market statistics. Users can browse, search, and filter NFTs to find the perfect digital asset.
    <br/><br/>
    <b>Detailed NFT View:</b> Each NFT has a dedicated page with detailed information, including properties,
    ownership history, and a bidding/purchasing interface.
    <br/><br/>
    <b>Blockchain Integration:</b> The platform is integrated with the Ethereum blockchain using ethers.js and
    Moralis for fetching on-chain data. NFT metadata is stored on IPFS via NFT.Storage, ensuring
    decentralization and permanence.
    <br/><br/>
    <b>Technology Stack:</b>
    <br/><br/>
    <b>Frontend:</b> React, Vite, TypeScript, Tailwind CSS
    <br/>
    <b>UI Components:</b> shadcn/ui, Radix UI, Lucide React
    <br/>
    <b>Animation:</b> Framer Motion
    <br/>
    <b>Backend & Database:</b> Supabase
    <br/>
    <b>Blockchain:</b> Ethers.js, Moralis
    <br/>
    <b>Decentralized Storage:</b> IPFS (via NFT.Storage)
    "#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Title,
    Spacer,
    BodyText,
}

/// One entry of a story. Stories are laid out in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Title { text: String, style: ParagraphStyle },
    Spacer { height: Length },
    BodyText { text: String, style: ParagraphStyle },
}

impl ContentBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Title { .. } => BlockKind::Title,
            ContentBlock::Spacer { .. } => BlockKind::Spacer,
            ContentBlock::BodyText { .. } => BlockKind::BodyText,
        }
    }

    /// The block's markup; `None` for spacers.
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Title { text, .. } | ContentBlock::BodyText { text, .. } => {
                Some(text.as_str())
            }
            ContentBlock::Spacer { .. } => None,
        }
    }

    pub fn style(&self) -> Option<&ParagraphStyle> {
        match self {
            ContentBlock::Title { style, .. } | ContentBlock::BodyText { style, .. } => Some(style),
            ContentBlock::Spacer { .. } => None,
        }
    }

    pub fn to_flowable(&self) -> Result<Flowable, MarkupError> {
        Ok(match self {
            ContentBlock::Title { text, style } | ContentBlock::BodyText { text, style } => {
                Paragraph::from_markup(text, style.clone())?.into()
            }
            ContentBlock::Spacer { height } => Spacer::new(*height).into(),
        })
    }
}

/// The text of an abstract. `Default` is the Pixel-Vault abstract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbstractContent {
    pub title: String,
    /// Body markup (`<b>`, `<i>`, `<br/>`).
    pub body: String,
    pub title_alignment: TextAlign,
    /// Gap between title and body.
    pub spacer: Length,
}

impl Default for AbstractContent {
    fn default() -> Self {
        Self {
            title: TITLE_TEXT.to_string(),
            body: BODY_MARKUP.to_string(),
            title_alignment: TextAlign::Center,
            spacer: Length::inches(0.25),
        }
    }
}

impl AbstractContent {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_markup_is_well_formed() {
        folio_markup::validate(BODY_MARKUP).unwrap();
        let text = folio_markup::plain_text(&folio_markup::parse(BODY_MARKUP).unwrap());
        assert!(text.starts_with("Pixel-Vault is a modern, full-featured NFT marketplace"));
        assert!(text.contains("Modern Frontend & UI Components:"));
        assert!(text.ends_with("IPFS (via NFT.Storage)"));
    }

    #[test]
    fn default_content_is_the_pixel_vault_abstract() {
        let content = AbstractContent::default();
        assert_eq!(content.title, "Pixel-Vault: A Feature-Rich NFT Marketplace");
        assert_eq!(content.title_alignment, TextAlign::Center);
        assert_eq!(content.spacer.to_pt(), 18.0);
    }

    #[test]
    fn content_from_json_fills_defaults() {
        let content = AbstractContent::from_json(
            r#"{"title": "Other", "spacer": "0.5in", "titleAlignment": "right"}"#,
        )
        .unwrap();
        assert_eq!(content.title, "Other");
        assert_eq!(content.spacer, Length::inches(0.5));
        assert_eq!(content.title_alignment, TextAlign::Right);
        assert_eq!(content.body, BODY_MARKUP);
    }

    #[test]
    fn bad_json_is_a_content_error() {
        assert!(matches!(
            AbstractContent::from_json("{\"spacer\": \"wide\"}"),
            Err(PipelineError::Content(_))
        ));
    }

    #[test]
    fn block_accessors() {
        let spacer = ContentBlock::Spacer {
            height: Length::pt(12.0),
        };
        assert_eq!(spacer.kind(), BlockKind::Spacer);
        assert_eq!(spacer.text(), None);
        assert!(spacer.style().is_none());

        let body = ContentBlock::BodyText {
            text: "<i>x</i>".to_string(),
            style: ParagraphStyle::default(),
        };
        assert_eq!(body.kind(), BlockKind::BodyText);
        assert_eq!(body.text(), Some("<i>x</i>"));
        assert!(matches!(body.to_flowable().unwrap(), Flowable::Paragraph(_)));
    }
}
