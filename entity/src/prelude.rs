pub use super::asistente::Entity as Asistente;
pub use super::beneficio::Entity as Beneficio;
pub use super::campus_sede::Entity as CampusSede;
pub use super::ciudad::Entity as Ciudad;
pub use super::continente::Entity as Continente;
pub use super::pais::Entity as Pais;
pub use super::pre_uach::Entity as PreUach;
pub use super::universidad::Entity as Universidad;
