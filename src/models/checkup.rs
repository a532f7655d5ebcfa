// src/models/checkup.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::ApiError;

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Data required: tekanan_darah, berat_badan, tanggal_pemeriksaan";

/// Satu baris tabel `data_ibu`. Semua kolom selain id disimpan sebagai string
/// supaya respons list identik dengan data yang dikirim saat insert.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct CheckupRecord {
    pub id: i32,
    pub tekanan_darah: String,
    pub berat_badan: String,
    pub keluhan: String,
    pub pergerakan_janin: String,
    pub tanggal_pemeriksaan: String,
    pub jenis_kunjungan: String,
    pub trimester: String,
    pub hasil_lab: String,
    pub hasil_usg: String,
    pub imunisasi_tt: String,
    pub catatan_anc: String,
}

/// Input insert, bisa dari JSON maupun form. Field yang tidak dikirim
/// dianggap string kosong (tidak ada beda antara absen dan kosong).
#[derive(Debug, Default, Deserialize)]
pub struct CheckupPayload {
    pub tekanan_darah: Option<String>,
    pub berat_badan: Option<String>,
    pub keluhan: Option<String>,
    pub pergerakan_janin: Option<String>,
    pub tanggal_pemeriksaan: Option<String>,
    pub jenis_kunjungan: Option<String>,
    pub trimester: Option<String>,
    pub hasil_lab: Option<String>,
    pub hasil_usg: Option<String>,
    pub imunisasi_tt: Option<String>,
    pub catatan_anc: Option<String>,
}

impl CheckupPayload {
    pub fn into_values(self) -> CheckupValues {
        CheckupValues {
            tekanan_darah: self.tekanan_darah.unwrap_or_default(),
            berat_badan: self.berat_badan.unwrap_or_default(),
            keluhan: self.keluhan.unwrap_or_default(),
            pergerakan_janin: self.pergerakan_janin.unwrap_or_default(),
            tanggal_pemeriksaan: self.tanggal_pemeriksaan.unwrap_or_default(),
            jenis_kunjungan: self.jenis_kunjungan.unwrap_or_default(),
            trimester: self.trimester.unwrap_or_default(),
            hasil_lab: self.hasil_lab.unwrap_or_default(),
            hasil_usg: self.hasil_usg.unwrap_or_default(),
            imunisasi_tt: self.imunisasi_tt.unwrap_or_default(),
            catatan_anc: self.catatan_anc.unwrap_or_default(),
        }
    }
}

/// Sebelas nilai kolom yang siap di-bind ke statement insert,
/// urutannya tetap sesuai skema tabel.
#[derive(Debug)]
pub struct CheckupValues {
    pub tekanan_darah: String,
    pub berat_badan: String,
    pub keluhan: String,
    pub pergerakan_janin: String,
    pub tanggal_pemeriksaan: String,
    pub jenis_kunjungan: String,
    pub trimester: String,
    pub hasil_lab: String,
    pub hasil_usg: String,
    pub imunisasi_tt: String,
    pub catatan_anc: String,
}

impl CheckupValues {
    // Validasi data required
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.tekanan_darah.is_empty()
            || self.berat_badan.is_empty()
            || self.tanggal_pemeriksaan.is_empty()
        {
            return Err(ApiError::Validation(REQUIRED_FIELDS_MESSAGE));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_lengkap() -> CheckupPayload {
        CheckupPayload {
            tekanan_darah: Some("120/80".to_string()),
            berat_badan: Some("65".to_string()),
            tanggal_pemeriksaan: Some("2024-01-10".to_string()),
            keluhan: Some("Mual di pagi hari".to_string()),
            ..CheckupPayload::default()
        }
    }

    #[test]
    fn field_absen_jadi_string_kosong() {
        let values = payload_lengkap().into_values();

        assert_eq!(values.tekanan_darah, "120/80");
        assert_eq!(values.keluhan, "Mual di pagi hari");
        assert_eq!(values.pergerakan_janin, "");
        assert_eq!(values.jenis_kunjungan, "");
        assert_eq!(values.trimester, "");
        assert_eq!(values.hasil_lab, "");
        assert_eq!(values.hasil_usg, "");
        assert_eq!(values.imunisasi_tt, "");
        assert_eq!(values.catatan_anc, "");
    }

    #[test]
    fn validasi_lolos_dengan_tiga_field_wajib() {
        assert!(payload_lengkap().into_values().validate().is_ok());
    }

    #[test]
    fn validasi_gagal_jika_field_wajib_kosong() {
        for wajib in ["tekanan_darah", "berat_badan", "tanggal_pemeriksaan"] {
            let mut payload = payload_lengkap();
            match wajib {
                "tekanan_darah" => payload.tekanan_darah = Some(String::new()),
                "berat_badan" => payload.berat_badan = None,
                _ => payload.tanggal_pemeriksaan = Some(String::new()),
            }

            let err = payload.into_values().validate().unwrap_err();
            assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn payload_bisa_dari_json_dan_form() {
        let json: CheckupPayload =
            serde_json::from_str(r#"{"tekanan_darah":"110/70","berat_badan":"58"}"#).unwrap();
        assert_eq!(json.tekanan_darah.as_deref(), Some("110/70"));
        assert!(json.tanggal_pemeriksaan.is_none());

        let form: CheckupPayload =
            serde_urlencoded::from_str("tekanan_darah=110%2F70&berat_badan=58").unwrap();
        assert_eq!(form.tekanan_darah.as_deref(), Some("110/70"));
        assert_eq!(form.berat_badan.as_deref(), Some("58"));
    }
}
