use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomyAccountDto {
    pub discord_id: String,
    pub salario: i64,
    pub debito: i64,
    pub gobierno: i64,
    pub empresa: i64,
    pub efectivo: i64,
    pub dinero_negro: i64,
    pub deuda: i64,
    pub dolares: i64,
    pub euros: i64,
}

impl EconomyAccountDto {
    pub fn from_entity(entity: entity::economy_account::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            salario: entity.salario,
            debito: entity.debito,
            gobierno: entity.gobierno,
            empresa: entity.empresa,
            efectivo: entity.efectivo,
            dinero_negro: entity.dinero_negro,
            deuda: entity.deuda,
            dolares: entity.dolares,
            euros: entity.euros,
        }
    }
}

/// Sub-balance a staff deposit can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubBalance {
    Salario,
    Debito,
    Gobierno,
    Empresa,
    Efectivo,
    DineroNegro,
    Deuda,
    Dolares,
    Euros,
}

impl SubBalance {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "salario" => Ok(Self::Salario),
            "debito" => Ok(Self::Debito),
            "gobierno" => Ok(Self::Gobierno),
            "empresa" => Ok(Self::Empresa),
            "efectivo" => Ok(Self::Efectivo),
            "dineroNegro" => Ok(Self::DineroNegro),
            "deuda" => Ok(Self::Deuda),
            "dolares" => Ok(Self::Dolares),
            "euros" => Ok(Self::Euros),
            other => Err(AppError::BadRequest(format!(
                "Cuenta desconocida: {}",
                other
            ))),
        }
    }
}

/// How a purchase was covered: checking first, remainder from cash.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseBreakdownDto {
    pub monto: i64,
    pub de_debito: i64,
    pub de_efectivo: i64,
}
