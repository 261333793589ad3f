//! Compiled-in reference content.

pub mod faq;
pub mod services;

pub const APP_DESCRIPTION_SHORT: &str =
    "ConsulaRO este asistentul tău digital pentru relația cu consulatele României.";

pub const APP_DESCRIPTION_FULL: &str = "ConsulaRO este o aplicație modernă dedicată românilor din diaspora, menită să simplifice interacțiunea cu misiunile diplomatice și oficiile consulare ale României. Prin intermediul acestei aplicații, puteți accesa rapid informații despre serviciile consulare, puteți trimite documente preliminare, și puteți rămâne la curent cu noutățile și evenimentele comunității.";
