// Static copy for every section. Nothing here is fetched.

pub const COMPANY: &str = "99 Aero Power";
pub const LEGAL_NAME: &str = "PT. Iklima Sukses Mandiri";
pub const MOTTO: &str = "Kreatif, Inovatif dan Inspiratif";

pub const PHONE_DISPLAY: &str = "+62 815 194 20311";
pub const PHONE_LINK: &str = "tel:+6281519420311";
pub const EMAIL: &str = "sales.project@99aeropower.com";
pub const EMAIL_LINK: &str = "mailto:sales.project@99aeropower.com";
pub const ADDRESS_LINES: [&str; 3] = [
    "Jl. Jendral Sudirman, KAV 26",
    "Karet Setia Budi, Sona Topas Tower 5A Floor",
    "Jakarta, Indonesia",
];

/// Sentinel category that disables portfolio filtering.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "#about", label: "Tentang Kami" },
    NavItem { href: "#services", label: "Layanan" },
    NavItem { href: "#advantages", label: "Keunggulan" },
    NavItem { href: "#portfolio", label: "Portfolio" },
    NavItem { href: "#contact", label: "Kontak" },
];

pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { href: "#about", label: "Tentang Kami" },
    NavItem { href: "#services", label: "Layanan" },
    NavItem { href: "#portfolio", label: "Portfolio" },
    NavItem { href: "#contact", label: "Kontak" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects" },
    Stat { value: "5+", label: "Years" },
    Stat { value: "20+", label: "Clients" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "5+", label: "Tahun Pengalaman" },
    Stat { value: "50+", label: "Project Selesai" },
];

pub const ADVANTAGE_STATS: &[Stat] = &[
    Stat { value: "99%", label: "Client Satisfaction" },
    Stat { value: "50", label: "Projects Completed" },
    Stat { value: "24/7", label: "Support Available" },
    Stat { value: "100%", label: "Success Rate" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🌐",
        title: "Pengembangan Website",
        description: "Layanan Website Design dan Development yang dilengkapi dengan proses analisa, perencanaan hingga implementasi platform digital untuk bisnis.",
        features: ["Responsive Design", "SEO Optimized", "Custom CMS", "E-commerce Integration"],
    },
    Service {
        icon: "📱",
        title: "Pengembangan Aplikasi Selular",
        description: "Layanan Mobile App Development (Android dan iOS) yang dilengkapi dengan proses analisa, perencanaan hingga implementasi platform digital untuk bisnis.",
        features: ["Native & Hybrid Apps", "Cross-platform", "App Store Deployment", "Maintenance Support"],
    },
    Service {
        icon: "⚙️",
        title: "Pengembangan Sistem Digital",
        description: "Kembangkan software sesuai proses bisnis unik & spesifik perusahaan anda. Anda akan mendapatkan software yang 100% adaptif yang menjawab kebutuhan digitalisasi proses bisnis.",
        features: ["Custom Software", "API Integration", "Database Design", "Cloud Solutions"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advantage {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: [&'static str; 3],
}

pub const ADVANTAGES: &[Advantage] = &[
    Advantage {
        icon: "⚡",
        title: "Teknologi Terdepan",
        description: "Menggunakan teknologi terbaru dan framework modern untuk mengembangkan solusi yang inovatif dan efisien.",
        benefits: ["Latest Tech Stack", "AI Integration", "Cloud Native"],
    },
    Advantage {
        icon: "🛡️",
        title: "Keamanan Terjamin",
        description: "Sistem keamanan enterprise-grade dengan enkripsi end-to-end untuk melindungi data dan informasi sensitif.",
        benefits: ["End-to-End Encryption", "Compliance Ready", "Regular Security Audits"],
    },
    Advantage {
        icon: "👥",
        title: "Tim Ahli Berpengalaman",
        description: "Didukung oleh tim profesional dengan pengalaman bertahun-tahun dalam pengembangan software dan sistem digital.",
        benefits: ["5+ Years Experience", "Certified Developers", "24/7 Support"],
    },
    Advantage {
        icon: "⏱️",
        title: "Pengembangan Cepat",
        description: "Metodologi agile dan tools modern memungkinkan pengembangan yang cepat tanpa mengorbankan kualitas.",
        benefits: ["Agile Methodology", "Fast Delivery", "Quality Assured"],
    },
    Advantage {
        icon: "🏆",
        title: "Kualitas Premium",
        description: "Komitmen terhadap standar kualitas tinggi dengan testing menyeluruh dan best practices industry.",
        benefits: ["Quality Testing", "Code Review", "Performance Optimized"],
    },
    Advantage {
        icon: "📈",
        title: "Solusi Scalable",
        description: "Arsitektur yang dapat berkembang seiring pertumbuhan bisnis Anda dengan performa yang tetap optimal.",
        benefits: ["Auto Scaling", "Load Balancing", "Future Proof"],
    },
];

pub const TRUST_INDICATORS: [&str; 3] = ["Konsultasi Gratis", "Garansi Kualitas", "Support 24/7"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: ALL_CATEGORIES, label: "Semua Project" },
    Category { id: "web", label: "Web Application" },
    Category { id: "mobile", label: "Mobile App" },
    Category { id: "system", label: "Custom System" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub client: &'static str,
    pub year: &'static str,
    pub category: &'static str,
    pub tags: [&'static str; 3],
    pub description: &'static str,
    /// Card banner gradient, `from` then `to`.
    pub colors: (&'static str, &'static str),
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "WMS (Warehouse Management System)",
        client: "PT. Dharma Bandar Mandiri",
        year: "2020",
        category: "web",
        tags: ["Web Application", "Dashboard", "Analytics"],
        description: "Sistem manajemen gudang terintegrasi dengan fitur tracking, analytics, dan management tools untuk optimasi operasional warehouse.",
        colors: ("#3b82f6", "#2563eb"),
    },
    PortfolioItem {
        id: 2,
        title: "LBJ Attendance Pro",
        client: "Pemerintahan Kabupaten Labuan Bajo",
        year: "2022",
        category: "mobile",
        tags: ["Mobile App", "Government", "Attendance"],
        description: "Aplikasi absensi online untuk pegawai pemerintahan dengan fitur GPS tracking, face recognition, dan reporting system.",
        colors: ("#22c55e", "#16a34a"),
    },
    PortfolioItem {
        id: 3,
        title: "E-Commerce Buildozzer",
        client: "PT Graha Bilar Bangunan",
        year: "2021",
        category: "web",
        tags: ["E-commerce", "Online Store", "Payment Gateway"],
        description: "Platform e-commerce untuk penjualan alat tukang, cat & perlengkapan material bangunan dengan sistem pembayaran terintegrasi.",
        colors: ("#f97316", "#ea580c"),
    },
    PortfolioItem {
        id: 4,
        title: "E-Cargo System",
        client: "PT. Dharma Bandar Mandiri Cargo",
        year: "2023",
        category: "system",
        tags: ["Web & Mobile", "Logistics", "Tracking"],
        description: "Sistem cargo terintegrasi untuk tracking pengiriman, management customer, dan analytics bisnis logistics di seluruh Indonesia.",
        colors: ("#a855f7", "#9333ea"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Client {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const CLIENTS: &[Client] = &[
    Client { name: "DBM Cargo & Logistics", logo: "DBM" },
    Client { name: "Kabupaten Manggarai Barat", logo: "KMB" },
    Client { name: "DBM Warehouse", logo: "DBM" },
    Client { name: "Buildozzer", logo: "BDZ" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub info: &'static str,
    /// `None` renders the info as plain text.
    pub link: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📞",
        title: "Telepon",
        info: PHONE_DISPLAY,
        link: Some(PHONE_LINK),
    },
    ContactChannel {
        icon: "✉️",
        title: "Email",
        info: EMAIL,
        link: Some(EMAIL_LINK),
    },
    ContactChannel {
        icon: "🌐",
        title: "Website",
        info: "www.99aeropower.com",
        link: Some("https://www.99aeropower.com"),
    },
    ContactChannel {
        icon: "📍",
        title: "Alamat",
        info: "Jl. Jendral Sudirman, KAV 26\nKaret Setia Budi, Sona Topas Tower 5A Floor\nJakarta, Indonesia",
        link: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BusinessHours {
    pub days: &'static str,
    pub short_days: &'static str,
    pub hours: &'static str,
}

pub const BUSINESS_HOURS: &[BusinessHours] = &[
    BusinessHours { days: "Senin - Jumat", short_days: "Sen - Jum", hours: "09:00 - 18:00" },
    BusinessHours { days: "Sabtu", short_days: "Sabtu", hours: "09:00 - 15:00" },
    BusinessHours { days: "Minggu", short_days: "Minggu", hours: "Tutup" },
];

pub const FOOTER_SERVICES: [&str; 6] = [
    "Website Development",
    "Mobile App Development",
    "E-commerce Solutions",
    "Custom Software",
    "UI/UX Design",
    "System Integration",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub short: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", short: "f", href: "#" },
    SocialLink { label: "Instagram", short: "ig", href: "#" },
    SocialLink { label: "LinkedIn", short: "in", href: "#" },
    SocialLink { label: "Twitter", short: "x", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_are_in_page_anchors() {
        for item in NAV_ITEMS.iter().chain(FOOTER_LINKS) {
            assert!(item.href.starts_with('#'), "{}", item.href);
        }
    }

    #[test]
    fn every_item_category_has_a_filter_button() {
        for item in PORTFOLIO_ITEMS {
            assert!(CATEGORIES.iter().any(|c| c.id == item.category), "{}", item.title);
            assert_ne!(item.category, ALL_CATEGORIES);
        }
    }

    #[test]
    fn only_the_address_is_unlinked() {
        let unlinked: Vec<_> = CONTACT_CHANNELS.iter().filter(|c| c.link.is_none()).collect();
        assert_eq!(unlinked.len(), 1);
        assert_eq!(unlinked[0].title, "Alamat");
        assert_eq!(unlinked[0].info.lines().collect::<Vec<_>>(), ADDRESS_LINES);
    }
}
