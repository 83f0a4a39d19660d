//! Static content for screens without a presenter.

/// Landing screen branding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingContent {
    pub brand: &'static str,
    pub subtitle: &'static str,
}

/// Safety information page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InformationContent {
    pub title: &'static str,
    pub intro: &'static str,
    pub rules: &'static [&'static str],
    pub closing: &'static str,
    /// Label of the external guide link.
    pub guide_label: &'static str,
    pub guide_url: &'static str,
}

pub const LANDING: LandingContent = LandingContent {
    brand: "SPARK",
    subtitle: "Smart Parking FT UGM",
};

pub const INFORMATION: InformationContent = InformationContent {
    title: "Informasi Safety Car Riding di Fakultas Teknik UGM",
    intro: "Dalam mendukung penerapan Safety, Health, and Environment (SHE) sesuai Peraturan \
            Rektor UGM, seluruh sivitas Fakultas Teknik wajib mengutamakan keselamatan saat \
            berkendara di lingkungan kampus.",
    rules: &[
        "Memakai helm (untuk motor) dan sabuk pengaman (untuk mobil)",
        "Membatasi kecepatan maksimal 30 km/jam",
        "Mematuhi rambu lalu lintas dan portal kendaraan",
        "Parkir tertib di lokasi yang telah ditentukan",
        "Tidak menggunakan HP saat berkendara, tidak melawan arus, dan tidak menghalangi jalur \
         evakuasi",
    ],
    closing: "Keselamatan adalah tanggung jawab bersama. Mari wujudkan lingkungan FT UGM yang \
              aman, sehat, dan tertib.",
    guide_label: "Lihat panduan lengkap TegakSHEI",
    guide_url: "https://ugm.id/TegakSHEI",
};
