//! Static translation tables for the built-in profiles.
//!
//! A lookup returning `None` means "no translation"; callers fall back to
//! the canonical data in the calendar's rules. `en-us` is the canonical
//! locale throughout, so its columns mirror the rules data.

use super::Locale;

/// Localized display name of a built-in calendar.
pub(crate) fn display_name(calendar: &str, locale: Locale) -> Option<&'static str> {
    let names = match calendar {
        "gregorian" => [
            "Gregorian Calendar",
            "Gregorianischer Kalender",
            "Calendrier Grégorien",
            "Calendario Gregoriano",
            "Calendario Gregoriano",
        ],
        "faerun" => [
            "Faerûn (Harptos Calendar)",
            "Faerûn (Harptos-Kalender)",
            "Faerûn (Calendrier Harptos)",
            "Faerûn (Calendario Harptos)",
            "Faerûn (Calendario Harptos)",
        ],
        "golarion" => [
            "Golarion (Absalom Reckoning)",
            "Golarion (Absalom-Zeitrechnung)",
            "Golarion (Comput d'Absalom)",
            "Golarion (Cómputo de Absalom)",
            "Golarion (Computo di Absalom)",
        ],
        "dsa" => [
            "Das Schwarze Auge (Aventurian Calendar)",
            "Das Schwarze Auge (Aventurischer Kalender)",
            "Das Schwarze Auge (Calendrier Aventurien)",
            "Das Schwarze Auge (Calendario Aventuriano)",
            "Das Schwarze Auge (Calendario Aventuriano)",
        ],
        "eberron" => [
            "Eberron (Galifar Calendar)",
            "Eberron (Galifar-Kalender)",
            "Eberron (Calendrier Galifar)",
            "Eberron (Calendario Galifar)",
            "Eberron (Calendario Galifar)",
        ],
        "dragonlance" => [
            "Dragonlance (Krynn Calendar)",
            "Dragonlance (Krynn-Kalender)",
            "Dragonlance (Calendrier de Krynn)",
            "Dragonlance (Calendario de Krynn)",
            "Dragonlance (Calendario di Krynn)",
        ],
        "greyhawk" => [
            "Greyhawk (Common Year)",
            "Greyhawk (Gemeinjahr)",
            "Greyhawk (Année Commune)",
            "Greyhawk (Año Común)",
            "Greyhawk (Anno Comune)",
        ],
        _ => return None,
    };
    Some(pick(&names, locale))
}

/// Localized epoch notation (before, after) of a built-in calendar.
pub(crate) fn epoch_notation(
    calendar: &str,
    locale: Locale,
) -> Option<(&'static str, &'static str)> {
    let notations = match calendar {
        "gregorian" => [
            ("BCE", "CE"),
            ("v. Chr.", "n. Chr."),
            ("av. J.-C.", "ap. J.-C."),
            ("a.C.", "d.C."),
            ("a.C.", "d.C."),
        ],
        "faerun" => [
            ("Before DR", "DR"),
            ("Vor DR", "DR"),
            ("Avant DR", "DR"),
            ("Antes de DR", "DR"),
            ("Prima di DR", "DR"),
        ],
        "golarion" => [
            ("Before AR", "AR"),
            ("Vor AR", "AR"),
            ("Avant AR", "AR"),
            ("Antes de AR", "AR"),
            ("Prima di AR", "AR"),
        ],
        "dsa" => [
            ("Before BF", "BF"),
            ("Vor BF", "BF"),
            ("Avant BF", "BF"),
            ("Antes de BF", "BF"),
            ("Prima di BF", "BF"),
        ],
        "eberron" => [
            ("Before YK", "YK"),
            ("Vor YK", "YK"),
            ("Avant YK", "YK"),
            ("Antes de YK", "YK"),
            ("Prima di YK", "YK"),
        ],
        "dragonlance" => [
            ("PC", "AC"),
            ("VK", "NK"),
            ("AC", "PC"),
            ("AC", "DC"),
            ("PC", "DC"),
        ],
        "greyhawk" => [
            ("Before CY", "CY"),
            ("Vor GJ", "GJ"),
            ("Avant AC", "AC"),
            ("Antes de AC", "AC"),
            ("Prima di AC", "AC"),
        ],
        _ => return None,
    };
    Some(pick(&notations, locale))
}

/// Localized month names of a built-in calendar. Calendars whose months
/// are proper nouns have no entry here.
pub(crate) fn month_names(calendar: &str, locale: Locale) -> Option<&'static [&'static str]> {
    match (calendar, locale) {
        ("gregorian", Locale::De) => Some(&[
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ]),
        ("gregorian", Locale::Fr) => Some(&[
            "Janvier", "Février", "Mars", "Avril", "Mai", "Juin", "Juillet", "Août", "Septembre",
            "Octobre", "Novembre", "Décembre",
        ]),
        ("gregorian", Locale::Es) => Some(&[
            "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
            "Septiembre", "Octubre", "Noviembre", "Diciembre",
        ]),
        ("gregorian", Locale::It) => Some(&[
            "Gennaio", "Febbraio", "Marzo", "Aprile", "Maggio", "Giugno", "Luglio", "Agosto",
            "Settembre", "Ottobre", "Novembre", "Dicembre",
        ]),
        ("dragonlance", Locale::De) => Some(&[
            "Tiefwinter",
            "Winterschwund",
            "Frühlingserwachen",
            "Frühlingsregen",
            "Frühlingsblüte",
            "Sommerheim",
            "Sommerlauf",
            "Sommerende",
            "Herbsternte",
            "Herbstdämmerung",
            "Herbstdunkel",
            "Winterankunft",
        ]),
        ("dragonlance", Locale::Fr) => Some(&[
            "Hiver Profond",
            "Déclin d'Hiver",
            "Aube du Printemps",
            "Pluie de Printemps",
            "Floraison du Printemps",
            "Foyer d'Été",
            "Course d'Été",
            "Fin d'Été",
            "Moisson d'Automne",
            "Crépuscule d'Automne",
            "Obscurité d'Automne",
            "Venue de l'Hiver",
        ]),
        ("dragonlance", Locale::Es) => Some(&[
            "Invierno Profundo",
            "Mengua del Invierno",
            "Amanecer de Primavera",
            "Lluvia de Primavera",
            "Floración de Primavera",
            "Hogar de Verano",
            "Curso de Verano",
            "Fin de Verano",
            "Cosecha de Otoño",
            "Crepúsculo de Otoño",
            "Oscuridad de Otoño",
            "Llegada del Invierno",
        ]),
        ("dragonlance", Locale::It) => Some(&[
            "Inverno Profondo",
            "Declino dell'Inverno",
            "Alba di Primavera",
            "Pioggia di Primavera",
            "Fioritura di Primavera",
            "Casa d'Estate",
            "Corsa d'Estate",
            "Fine d'Estate",
            "Raccolto d'Autunno",
            "Crepuscolo d'Autunno",
            "Oscurità d'Autunno",
            "Arrivo dell'Inverno",
        ]),
        ("greyhawk", Locale::De) => Some(&[
            "Notfest",
            "Feuersuche",
            "Bereitung",
            "Kalteben",
            "Wachstumsfest",
            "Pflanzung",
            "Herdenzeit",
            "Wohlsonne",
            "Reichtumsfest",
            "Ernte",
            "Gutermond",
            "Ernter",
            "Braufest",
            "Flickmauer",
            "Bereitschaft",
            "Sonnenebb",
        ]),
        ("greyhawk", Locale::Fr) => Some(&[
            "Fête du Besoin",
            "Quête du Feu",
            "Préparation",
            "Froid Égal",
            "Fête de Croissance",
            "Plantation",
            "Temps du Troupeau",
            "Beau Soleil",
            "Fête Riche",
            "Moisson",
            "Bon Mois",
            "Moissonneur",
            "Fête de Brassage",
            "Mur de Pièces",
            "Prêt à Tout",
            "Déclin du Soleil",
        ]),
        ("greyhawk", Locale::Es) => Some(&[
            "Fiesta de la Necesidad",
            "Búsqueda del Fuego",
            "Preparación",
            "Frío Parejo",
            "Fiesta del Crecimiento",
            "Plantación",
            "Tiempo de Rebaño",
            "Sol de Riqueza",
            "Fiesta Rica",
            "Siega",
            "Buen Mes",
            "Cosechador",
            "Fiesta de Cerveza",
            "Muro de Parches",
            "Listo para Todo",
            "Ocaso del Sol",
        ]),
        ("greyhawk", Locale::It) => Some(&[
            "Festa del Bisogno",
            "Ricerca del Fuoco",
            "Preparazione",
            "Freddo Uniforme",
            "Festa della Crescita",
            "Piantagione",
            "Tempo del Gregge",
            "Sole di Ricchezza",
            "Festa Ricca",
            "Mietitura",
            "Buon Mese",
            "Mietitore",
            "Festa della Birra",
            "Muro di Toppe",
            "Pronto per Tutto",
            "Tramonto del Sole",
        ]),
        _ => None,
    }
}

/// Localized nameless-day labels (per group, in group order) of a
/// built-in calendar.
pub(crate) fn nameless_day_labels(
    calendar: &str,
    locale: Locale,
) -> Option<&'static [&'static [&'static str]]> {
    match (calendar, locale) {
        ("faerun", Locale::De) => Some(&[
            &["Mittwinter"],
            &["Grüngras"],
            &["Mittsommer"],
            &["Hocherntefest"],
            &["Fest des Mondes"],
        ]),
        ("faerun", Locale::Fr) => Some(&[
            &["Mi-Hiver"],
            &["Herbeverte"],
            &["Mi-Été"],
            &["Haute Moisson"],
            &["Fête de la Lune"],
        ]),
        ("faerun", Locale::Es) => Some(&[
            &["Pleno Invierno"],
            &["Hierba Verde"],
            &["Pleno Verano"],
            &["Alta Cosecha"],
            &["Fiesta de la Luna"],
        ]),
        ("faerun", Locale::It) => Some(&[
            &["Mezzo Inverno"],
            &["Erba Verde"],
            &["Mezza Estate"],
            &["Alto Raccolto"],
            &["Festa della Luna"],
        ]),
        ("dsa", Locale::De) => Some(&[&[
            "Erster Namenloser Tag",
            "Zweiter Namenloser Tag",
            "Dritter Namenloser Tag",
            "Vierter Namenloser Tag",
            "Fünfter Namenloser Tag",
        ]]),
        ("dsa", Locale::Fr) => Some(&[&[
            "Premier Jour Sans Nom",
            "Deuxième Jour Sans Nom",
            "Troisième Jour Sans Nom",
            "Quatrième Jour Sans Nom",
            "Cinquième Jour Sans Nom",
        ]]),
        ("dsa", Locale::Es) => Some(&[&[
            "Primer Día Sin Nombre",
            "Segundo Día Sin Nombre",
            "Tercer Día Sin Nombre",
            "Cuarto Día Sin Nombre",
            "Quinto Día Sin Nombre",
        ]]),
        ("dsa", Locale::It) => Some(&[&[
            "Primo Giorno Senza Nome",
            "Secondo Giorno Senza Nome",
            "Terzo Giorno Senza Nome",
            "Quarto Giorno Senza Nome",
            "Quinto Giorno Senza Nome",
        ]]),
        _ => None,
    }
}

fn pick<T: Copy>(entries: &[T; 5], locale: Locale) -> T {
    let index = match locale {
        Locale::EnUs => 0,
        Locale::De => 1,
        Locale::Fr => 2,
        Locale::Es => 3,
        Locale::It => 4,
    };
    entries[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_calendars_have_no_tables() {
        assert_eq!(display_name("klingon", Locale::De), None);
        assert_eq!(month_names("klingon", Locale::De), None);
        assert_eq!(epoch_notation("klingon", Locale::De), None);
        assert_eq!(nameless_day_labels("klingon", Locale::De), None);
    }

    #[test]
    fn proper_noun_calendars_have_no_month_tables() {
        assert_eq!(month_names("faerun", Locale::De), None);
        assert_eq!(month_names("dsa", Locale::Fr), None);
        assert_eq!(month_names("golarion", Locale::It), None);
    }

    #[test]
    fn gregorian_localizes_fully() {
        assert_eq!(display_name("gregorian", Locale::Fr), Some("Calendrier Grégorien"));
        assert_eq!(
            month_names("gregorian", Locale::De).map(|names| names[2]),
            Some("März")
        );
        assert_eq!(
            epoch_notation("gregorian", Locale::EnUs),
            Some(("BCE", "CE"))
        );
    }

    #[test]
    fn greyhawk_month_tables_cover_sixteen_months() {
        for locale in [Locale::De, Locale::Fr, Locale::Es, Locale::It] {
            assert_eq!(month_names("greyhawk", locale).map(<[_]>::len), Some(16));
        }
    }
}
