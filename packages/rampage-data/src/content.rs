//! Hardcoded download-page content.
//!
//! Only the changelog is file-backed; everything the page advertises about
//! game builds, archives, and installation lives here as static literals.

pub const SITE_TITLE: &str = "Rampage Trainer";

pub const LOGO_FILE_NAME: &str = "trainer.png";

pub const BLURB: &str = "Modern trainer with a minimal UI. Download beta builds, read \
changelogs, and follow install instructions tailored for GTA V and FiveM build 3258.";

pub const TUTORIAL_URL: &str = "https://github.com/rampage-trainer/gta5/blob/main/README.md#rampage-trainer-asi-installation-guide";

pub const QUICK_INSTALL_SUMMARY: &str = "Use the Windows 11 PowerShell script in the README \
to download ScriptHookV, copy Rampage.asi, and mirror the trainer into FiveM's plugins folder.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Supported,
    Verified,
}

impl BuildStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            BuildStatus::Supported => "Supported",
            BuildStatus::Verified => "Verified",
        }
    }
}

/// One game build the trainer is known to run on.
#[derive(Debug, Clone, Copy)]
pub struct SupportedBuild {
    pub label: &'static str,
    pub description: &'static str,
    pub status: BuildStatus,
}

pub const SUPPORTED_BUILDS: &[SupportedBuild] = &[
    SupportedBuild {
        label: "GTA5 Enhanced",
        description: "Build 1.0.889.22",
        status: BuildStatus::Supported,
    },
    SupportedBuild {
        label: "GTA5 Legacy",
        description: "Build 1.0.3586.0",
        status: BuildStatus::Supported,
    },
    SupportedBuild {
        label: "FiveM Client",
        description: "Enforced game build 3258",
        status: BuildStatus::Verified,
    },
];

/// Externally hosted binary archive the page links to. Never fetched or
/// verified here.
#[derive(Debug, Clone, Copy)]
pub struct DownloadPackage {
    pub label: &'static str,
    pub url: &'static str,
}

pub const DOWNLOAD_PACKAGES: &[DownloadPackage] = &[
    DownloadPackage {
        label: "Download Enhanced Beta",
        url: "https://raw.githubusercontent.com/rampage-trainer/gta5/main/build/Rampage_Enhanced.zip",
    },
    DownloadPackage {
        label: "Download Legacy Beta",
        url: "https://raw.githubusercontent.com/rampage-trainer/gta5/main/build/Rampage_Legacy.zip",
    },
];

pub const INSTALL_STEPS: &[&str] = &[
    "Download either the Enhanced or Legacy beta package.",
    "Follow the README PowerShell tutorial to install ScriptHookV and Rampage.",
    "Verify Rampage.asi and RampageFiles exist in both GTA V and FiveM's plugins folder.",
    "Launch GTA V or FiveM (build 3258) and press F4 to open the trainer.",
];

pub const INSTALL_NOTE: &str = "Always merge new RampageFiles with your existing folder when \
updating, especially if you keep FiveM client overrides.";
