//! # Endereços de Demonstração
//!
//! Um pequeno conjunto de endereços reais (EUA, Espanha, Brasil, Reino Unido)
//! com os campos que um geocodificador tipicamente devolve para cada um.
//! Serve para o subcomando `demo` da CLI e para os testes de integração do
//! pipeline — sem depender de arquivos externos nem de chamadas de rede.

use crate::pipeline::{AddressRecord, GeocodedFields};

/// Um endereço de demonstração com os campos geocodificados correspondentes.
pub struct DemoAddress {
    /// Endereço em texto livre, como um usuário digitaria
    pub address: &'static str,
    pub street_number: Option<&'static str>,
    pub street_name: Option<&'static str>,
    pub municipality: Option<&'static str>,
    pub subdivision: Option<&'static str>,
    pub postal_code: Option<&'static str>,
    pub country: Option<&'static str>,
}

impl DemoAddress {
    /// Converte para o registro de entrada do pipeline.
    pub fn to_record(&self) -> AddressRecord {
        AddressRecord {
            address: self.address.to_string(),
            geocode: GeocodedFields {
                street_number: self.street_number.map(str::to_string),
                street_name: self.street_name.map(str::to_string),
                municipality: self.municipality.map(str::to_string),
                country_subdivision: self.subdivision.map(str::to_string),
                postal_code: self.postal_code.map(str::to_string),
                country: self.country.map(str::to_string),
                ..GeocodedFields::default()
            },
        }
    }
}

/// O corpus de demonstração completo.
pub const DEMO_ADDRESSES: &[DemoAddress] = &[
    DemoAddress {
        address: "123 Main Street, Springfield, IL 62704",
        street_number: Some("123"),
        street_name: Some("main street"),
        municipality: Some("springfield"),
        subdivision: Some("il"),
        postal_code: Some("62704"),
        country: Some("united states"),
    },
    DemoAddress {
        address: "Calle de Alcalá 23, 28014 Madrid",
        street_number: Some("23"),
        street_name: Some("calle de alcala"),
        municipality: Some("madrid"),
        subdivision: Some("comunidad de madrid"),
        postal_code: Some("28014"),
        country: Some("spain"),
    },
    DemoAddress {
        address: "Av. Paulista, 1578 - Bela Vista, São Paulo",
        street_number: Some("1578"),
        street_name: Some("avenida paulista"),
        municipality: Some("sao paulo"),
        subdivision: Some("sp"),
        postal_code: None,
        country: Some("brazil"),
    },
    DemoAddress {
        address: "10 Downing St, London SW1A 2AA",
        street_number: Some("10"),
        street_name: Some("downing street"),
        municipality: Some("london"),
        subdivision: None,
        postal_code: Some("sw1a 2aa"),
        country: Some("united kingdom"),
    },
    DemoAddress {
        address: "Gran Vía 44, Piso 2 Izqda, 28013 Madrid",
        street_number: Some("44"),
        street_name: Some("gran via"),
        municipality: Some("madrid"),
        subdivision: Some("comunidad de madrid"),
        postal_code: Some("28013"),
        country: Some("spain"),
    },
    DemoAddress {
        address: "1600 Pennsylvania Avenue NW, Washington, DC 20500",
        street_number: Some("1600"),
        street_name: Some("pennsylvania avenue nw"),
        municipality: Some("washington"),
        subdivision: Some("dc"),
        postal_code: Some("20500"),
        country: Some("united states"),
    },
];

/// Os endereços de demonstração já convertidos em registros do pipeline.
pub fn demo_records() -> Vec<AddressRecord> {
    DEMO_ADDRESSES.iter().map(DemoAddress::to_record).collect()
}
