use urlencoding::encode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareNetwork {
    WhatsApp,
    Twitter,
    Facebook,
}

impl ShareNetwork {
    pub const ALL: [ShareNetwork; 3] = [
        ShareNetwork::WhatsApp,
        ShareNetwork::Twitter,
        ShareNetwork::Facebook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShareNetwork::WhatsApp => "WhatsApp",
            ShareNetwork::Twitter => "X",
            ShareNetwork::Facebook => "Facebook",
        }
    }

    pub fn brand_color(self) -> &'static str {
        match self {
            ShareNetwork::WhatsApp => "#25d366",
            ShareNetwork::Twitter => "#000000",
            ShareNetwork::Facebook => "#1877f2",
        }
    }

    pub fn share_url(self, page_url: &str, title: &str) -> String {
        match self {
            ShareNetwork::WhatsApp => format!(
                "https://api.whatsapp.com/send?text={}",
                encode(&format!("{title} {page_url}"))
            ),
            ShareNetwork::Twitter => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                encode(page_url),
                encode(title)
            ),
            ShareNetwork::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                encode(page_url)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub network: ShareNetwork,
    pub href: String,
}

pub fn share_links(page_url: &str, title: &str) -> Vec<ShareLink> {
    ShareNetwork::ALL
        .into_iter()
        .map(|network| ShareLink {
            network,
            href: network.share_url(page_url, title),
        })
        .collect()
}
