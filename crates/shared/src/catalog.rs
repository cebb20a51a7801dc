//! Static destination catalog, service topics and quiz options.
//!
//! Everything here is `'static` and read-only; lookups by typed id are total
//! because every id variant maps to exactly one record.

use crate::{
    domain::{
        Accent, Destination, DestinationId, Icon, QuizOption, ServiceInfo, ServiceTopic,
    },
    error::CatalogError,
};

static DESTINATIONS: [Destination; 3] = [
    Destination {
        id: DestinationId::Paris1889,
        title: "Paris 1889",
        subtitle: "La Cité de Fer et de Lumière",
        description: "Vivez l'Exposition Universelle. Admirez la Tour Eiffel en construction et les 56 000 becs de gaz parisiens.",
        long_description: "Paris, 1889. Le monde entier converge vers le Champ-de-Mars pour l'Exposition Universelle. Entre les structures métalliques audacieuses de la Galerie des Machines et l'élégance de la Belle Époque, découvrez une capitale à l'apogée de son influence.",
        historical_details: &[
            "Tour Eiffel : Érigée pour l'Expo, culminant à plus de 300m.",
            "Galerie des Machines : Nef métallique monumentale de 420m de long.",
            "Mode : Silhouette en 'S' et chapeaux surdimensionnés.",
            "Lumière : Éclairage par 56 573 becs de gaz parisiens.",
        ],
        image: "paris1889_hero_16_9.png",
        fallback_image: "https://images.unsplash.com/photo-1543349689-9a4d426bee8e?q=80&w=1000&auto=format&fit=crop",
        accent: Accent::Amber,
        icon: Icon::Tower,
        price: "18,890 €",
        duration: "4 jours",
    },
    Destination {
        id: DestinationId::Cretace,
        title: "Crétacé -65M",
        subtitle: "L'Empire des Géants",
        description: "Explorez un monde sauvage sans glace. Rencontrez le T-Rex et les titanosaures dans des forêts vierges.",
        long_description: "Un voyage aux origines de la Terre. Sous un climat tropical humide, parcourez des forêts de conifères géants. Observez la majesté du Tyrannosaurus Rex et la grâce des Tricératops.",
        historical_details: &[
            "Faune : Tyrannosaurus rex, Velociraptor et Patagotitan.",
            "Flore : Forêts denses d'araucarias, de ginkgos et de fougères.",
            "Climat : Chaud, humide, sans calottes glaciaires aux pôles.",
            "Ciel : Activité volcanique intense et nuits étoilées.",
        ],
        image: "cretace_hero_16_9.png",
        fallback_image: "https://images.unsplash.com/photo-1518709268805-4e9042af9f23?q=80&w=1000&auto=format&fit=crop",
        accent: Accent::Emerald,
        icon: Icon::Trees,
        price: "25,000 €",
        duration: "6 jours",
    },
    Destination {
        id: DestinationId::Florence1504,
        title: "Florence 1504",
        subtitle: "Le Berceau de la Renaissance",
        description: "Arpentez les rues de la Toscane. Rencontrez Michel-Ange et admirez le dôme de Brunelleschi.",
        long_description: "Florence, 1504. La cité est en pleine ébullition créative. Du Palazzo Vecchio à la coupole de Santa Maria del Fiore, découvrez le génie de Michel-Ange et Léonard de Vinci.",
        historical_details: &[
            "Architecture : Dôme de Brunelleschi et Bibliothèque Laurentienne.",
            "Art : Utilisation de pigments rares comme l'ultramarine.",
            "Mode : Robes en soie brodée et velours luxueux.",
            "Esprit : Naissance de l'humanisme moderne.",
        ],
        image: "florence1504_hero_16_9.png",
        fallback_image: "https://images.unsplash.com/photo-1534445161038-038234676527?q=80&w=1000&auto=format&fit=crop",
        accent: Accent::Rose,
        icon: Icon::Palette,
        price: "15,040 €",
        duration: "5 jours",
    },
];

static SERVICES: [ServiceInfo; 3] = [
    ServiceInfo {
        topic: ServiceTopic::Paradox,
        title: "Assurance Paradoxe",
        icon: Icon::ShieldAlert,
        description: "Protection totale contre les boucles temporelles. En cas de paradoxe, notre système vous extrait instantanément vers une timeline refuge.",
    },
    ServiceInfo {
        topic: ServiceTopic::Alpha,
        title: "Vaisseaux Alpha",
        icon: Icon::Rocket,
        description: "La pointe de la technologie spatio-temporelle. Moteurs à courbure chronale certifiés pour des sauts de plus de 100 millions d'années.",
    },
    ServiceInfo {
        topic: ServiceTopic::Guide,
        title: "Guide Expert",
        icon: Icon::UserCheck,
        description: "Des historiens et ethnologues de classe mondiale vous accompagnent pour garantir une immersion authentique et sécurisée.",
    },
];

pub const QUIZ_OPTIONS: [QuizOption; 3] = [
    QuizOption {
        label: "L'odeur du fer et du gaz (Paris)",
        recommends: DestinationId::Paris1889,
    },
    QuizOption {
        label: "L'humidité d'une forêt vierge (Crétacé)",
        recommends: DestinationId::Cretace,
    },
    QuizOption {
        label: "Le toucher du velours précieux (Florence)",
        recommends: DestinationId::Florence1504,
    },
];

/// Destinations in display order.
pub fn destinations() -> &'static [Destination] {
    &DESTINATIONS
}

pub fn destination(id: DestinationId) -> &'static Destination {
    match id {
        DestinationId::Paris1889 => &DESTINATIONS[0],
        DestinationId::Cretace => &DESTINATIONS[1],
        DestinationId::Florence1504 => &DESTINATIONS[2],
    }
}

pub fn find_destination(key: &str) -> Result<&'static Destination, CatalogError> {
    key.parse::<DestinationId>().map(destination)
}

pub fn service(topic: ServiceTopic) -> &'static ServiceInfo {
    match topic {
        ServiceTopic::Paradox => &SERVICES[0],
        ServiceTopic::Alpha => &SERVICES[1],
        ServiceTopic::Guide => &SERVICES[2],
    }
}

pub fn services() -> &'static [ServiceInfo] {
    &SERVICES
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn destination_ids_are_unique_and_indexed_consistently() {
        let ids: HashSet<_> = destinations().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), destinations().len());

        for id in DestinationId::ALL {
            assert_eq!(destination(*id).id, *id);
        }
        for topic in ServiceTopic::ALL {
            assert_eq!(service(*topic).topic, *topic);
        }
    }

    #[test]
    fn every_destination_has_exactly_one_quiz_option() {
        for dest in destinations() {
            let matching = QUIZ_OPTIONS
                .iter()
                .filter(|opt| opt.recommends == dest.id)
                .count();
            assert_eq!(matching, 1, "quiz options for {}", dest.id);
        }
    }

    #[test]
    fn string_keys_resolve_through_validated_lookup() {
        assert_eq!(
            find_destination("florence-1504").map(|d| d.title),
            Ok("Florence 1504")
        );
        assert_eq!(
            find_destination("atlantis").map(|d| d.id),
            Err(CatalogError::UnknownDestination("atlantis".to_string()))
        );
        assert_eq!("guide".parse::<ServiceTopic>(), Ok(ServiceTopic::Guide));
        assert!("tardis".parse::<ServiceTopic>().is_err());
    }

    #[test]
    fn keys_serialize_as_catalog_identifiers() {
        let json = serde_json::to_string(&DestinationId::Paris1889).expect("serialize");
        assert_eq!(json, "\"paris-1889\"");
        let parsed: DestinationId = serde_json::from_str("\"cretace\"").expect("deserialize");
        assert_eq!(parsed, DestinationId::Cretace);
    }
}
