//! Built-in list tables
//!
//! Every list the build knows about, with the metadata written into its
//! header and, for third-party lists, the upstream it is downloaded from.

use nf_core::FileKind;

pub const NANO_LICENSE: &str = "GPL-3.0";
pub const NANO_SOURCE_PREFIX: &str =
    "https://github.com/NanoAdblocker/NanoFilters/tree/master/NanoFiltersSource/";

/// A list maintained in this repository.
pub struct NanoList {
    pub name: &'static str,
    pub title: Option<&'static str>,
    pub kind: FileKind,
}

pub const NANO_LISTS: &[NanoList] = &[
    NanoList { name: "NanoBase.txt", title: Some("Nano filters"), kind: FileKind::Filter },
    NanoList { name: "NanoAnnoyance.txt", title: Some("Nano filters - Annoyance"), kind: FileKind::Filter },
    NanoList { name: "NanoWhitelist.txt", title: Some("Nano filters - Whitelist"), kind: FileKind::Filter },
    NanoList { name: "NanoResources.txt", title: None, kind: FileKind::Resource },
];

/// Machine-readable asset manifest, passed through the JSON minimizer.
pub const ASSETS_MANIFEST: &str = "assets.json";

/// A third-party list mirrored into `ThirdParty/`.
pub struct ThirdPartyList {
    pub name: &'static str,
    /// Header title, for kinds that render one.
    pub title: Option<&'static str>,
    pub license: &'static str,
    pub url: &'static str,
    pub kind: FileKind,
    /// Only built with `--all`.
    pub extra: bool,
}

const UBLOCK_LICENSE: &str = "GPL-3.0";
const EASYLIST_LICENSE: &str = "GPL-3.0 / CC BY-SA 3.0";

pub const THIRD_PARTY_LISTS: &[ThirdPartyList] = &[
    ThirdPartyList {
        name: "PublicSuffix.dat",
        title: None,
        license: "MPL-2.0",
        url: "https://publicsuffix.org/list/public_suffix_list.dat",
        kind: FileKind::PublicSuffix,
        extra: true,
    },
    ThirdPartyList {
        name: "uBlockResources.txt",
        title: None,
        license: UBLOCK_LICENSE,
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/resources.txt",
        kind: FileKind::Resource,
        extra: false,
    },
    ThirdPartyList {
        name: "NanoDefender.txt",
        title: Some("Nano Defender Integration"),
        license: "GPL-3.0",
        url: "https://raw.githubusercontent.com/jspenguin2017/uBlockProtector/master/uBlockProtectorList.txt",
        kind: FileKind::Filter,
        extra: false,
    },
    ThirdPartyList {
        name: "uBlockBase.txt",
        title: Some("uBlock filters"),
        license: UBLOCK_LICENSE,
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/filters.txt",
        kind: FileKind::Filter,
        extra: false,
    },
    ThirdPartyList {
        name: "uBlockBadware.txt",
        title: Some("uBlock filters - Badware risks"),
        license: UBLOCK_LICENSE,
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/badware.txt",
        kind: FileKind::Filter,
        extra: false,
    },
    ThirdPartyList {
        name: "uBlockPrivacy.txt",
        title: Some("uBlock filters - Privacy"),
        license: UBLOCK_LICENSE,
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/privacy.txt",
        kind: FileKind::Filter,
        extra: false,
    },
    ThirdPartyList {
        name: "uBlockAbuse.txt",
        title: Some("uBlock filters - Resource abuse"),
        license: UBLOCK_LICENSE,
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/resource-abuse.txt",
        kind: FileKind::Filter,
        extra: false,
    },
    ThirdPartyList {
        name: "uBlockUnbreak.txt",
        title: Some("uBlock filters - Unbreak"),
        license: UBLOCK_LICENSE,
        url: "https://raw.githubusercontent.com/uBlockOrigin/uAssets/master/filters/unbreak.txt",
        kind: FileKind::Filter,
        extra: false,
    },
    ThirdPartyList {
        name: "WarningRemoval.txt",
        title: Some("Adblock Warning Removal List"),
        license: EASYLIST_LICENSE,
        url: "https://easylist-downloads.adblockplus.org/antiadblockfilters.txt",
        kind: FileKind::Filter,
        extra: false,
    },
    ThirdPartyList {
        name: "EasyList.txt",
        title: Some("EasyList"),
        license: EASYLIST_LICENSE,
        url: "https://easylist-downloads.adblockplus.org/easylist.txt",
        kind: FileKind::Filter,
        extra: false,
    },
    ThirdPartyList {
        name: "EasyPrivacy.txt",
        title: Some("EasyPrivacy"),
        license: EASYLIST_LICENSE,
        url: "https://easylist-downloads.adblockplus.org/easyprivacy.txt",
        kind: FileKind::Filter,
        extra: false,
    },
    ThirdPartyList {
        name: "MalwareDomain0.txt",
        title: Some("Malware Domain List"),
        license: "Non-commercial use",
        url: "https://www.malwaredomainlist.com/hostslist/hosts.txt",
        kind: FileKind::Hosts { block_syntax: true },
        extra: false,
    },
    ThirdPartyList {
        name: "MalwareDomain1.txt",
        title: Some("Malware Domains"),
        license: "Non-commercial use",
        url: "https://mirror1.malwaredomains.com/files/justdomains",
        kind: FileKind::Hosts { block_syntax: true },
        extra: false,
    },
    ThirdPartyList {
        name: "PeterLowe.txt",
        title: Some("Peter Lowe's Ad and tracking server list"),
        license: "McRae GPL",
        url: "https://pgl.yoyo.org/adservers/serverlist.php?hostformat=hosts&showintro=1&mimetype=plaintext",
        kind: FileKind::Hosts { block_syntax: true },
        extra: false,
    },
];
