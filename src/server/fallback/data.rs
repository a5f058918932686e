//! Built-in Hitman 3 mission dataset.

use crate::model::{
    content::Slug,
    fallback::FallbackMission,
    mission::{
        Challenge, ChallengeType, Disguise, MasteryUnlock, MasteryUnlockType, MissionDifficulty,
        Opportunity, OpportunityDifficulty, SecurityLevel, Target, TargetRoutine, Weapon,
        WeaponType,
    },
};

/// Mission IDs in dataset order.
pub static MISSION_IDS: [&str; 4] = ["paris", "sapienza", "dubai", "dartmoor"];

/// Builds the four fallback missions.
pub fn missions() -> Vec<FallbackMission> {
    vec![paris(), sapienza(), dubai(), dartmoor()]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// `viktor_novikov` -> `viktor-novikov`
fn slug_for(id: &str) -> Slug {
    Slug::new(id.replace('_', "-"))
}

fn target(
    id: &str,
    name: &str,
    description: &str,
    locations: &[&str],
    routines: Vec<TargetRoutine>,
    vulnerabilities: &[&str],
) -> Target {
    Target {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug_for(id),
        description: Some(description.to_string()),
        image: None,
        locations: strings(locations),
        routines,
        vulnerabilities: strings(vulnerabilities),
    }
}

fn routine(
    time_start: u32,
    location: &str,
    action: &str,
    duration: u32,
    security_level: SecurityLevel,
) -> TargetRoutine {
    TargetRoutine {
        time_start,
        location: location.to_string(),
        action: action.to_string(),
        duration,
        security_level,
    }
}

fn disguise(
    id: &str,
    name: &str,
    access_areas: &[&str],
    restricted_areas: &[&str],
    obtain_method: &str,
    suspicious_to: &[&str],
) -> Disguise {
    Disguise {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug_for(id),
        image: None,
        access_areas: strings(access_areas),
        restricted_areas: strings(restricted_areas),
        obtain_method: Some(obtain_method.to_string()),
        suspicious_to: strings(suspicious_to),
    }
}

fn weapon(
    id: &str,
    name: &str,
    weapon_type: WeaponType,
    concealable: bool,
    locations: &[&str],
) -> Weapon {
    Weapon {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug_for(id),
        weapon_type,
        image: None,
        concealable,
        locations: strings(locations),
        unlock_level: None,
        description: None,
    }
}

fn opportunity(
    id: &str,
    name: &str,
    description: &str,
    steps: &[&str],
    required_disguise: &str,
    difficulty: OpportunityDifficulty,
) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug_for(id),
        description: Some(description.to_string()),
        image: None,
        steps: strings(steps),
        required_items: Vec::new(),
        required_disguise: Some(required_disguise.to_string()),
        difficulty,
        detailed_walkthrough: None,
    }
}

fn challenge(
    id: &str,
    name: &str,
    description: &str,
    challenge_type: ChallengeType,
    xp_reward: u32,
    requirements: &[&str],
) -> Challenge {
    Challenge {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug_for(id),
        description: Some(description.to_string()),
        challenge_type,
        xp_reward,
        requirements: strings(requirements),
        tips: None,
    }
}

fn mastery(
    mission_id: &str,
    level: u8,
    unlock: &str,
    unlock_type: MasteryUnlockType,
    description: &str,
) -> MasteryUnlock {
    MasteryUnlock {
        id: format!("{}_mastery_{}", mission_id, level),
        level,
        unlock: unlock.to_string(),
        unlock_type,
        description: Some(description.to_string()),
        image: None,
    }
}

fn silent_assassin(id: &str) -> Challenge {
    challenge(
        id,
        "Silent Assassin",
        "Complete the mission as Silent Assassin.",
        ChallengeType::Classics,
        5000,
        &[
            "No detections",
            "No non-target kills",
            "No bodies found",
            "Targets eliminated",
        ],
    )
}

fn chameleon(id: &str, location: &str) -> Challenge {
    challenge(
        id,
        "Chameleon",
        &format!("Find and equip all unique disguises in {}.", location),
        ChallengeType::Discovery,
        2000,
        &["Collect all unique disguises"],
    )
}

fn paris() -> FallbackMission {
    use OpportunityDifficulty as Opp;
    use SecurityLevel::*;

    FallbackMission {
        id: "paris".to_string(),
        name: "The Showstopper".to_string(),
        location: "Paris, France".to_string(),
        difficulty: MissionDifficulty::Novice,
        targets: vec![
            target(
                "viktor_novikov",
                "Viktor Novikov",
                "Fashion mogul and IAGO ring leader",
                &["Fashion Show", "Bar", "Auction Room"],
                vec![
                    routine(0, "Fashion Show Catwalk", "Watching show", 180, High),
                    routine(180, "Bar Area", "Socializing", 120, Medium),
                    routine(
                        300,
                        "Rooftop Helipad",
                        "Meeting with Dalia, then leaving",
                        60,
                        High,
                    ),
                ],
                &[
                    "Poisoned drink",
                    "Light rig accident",
                    "Fireworks explosion",
                    "Exploding confetti cannon",
                    "Helicopter crash",
                ],
            ),
            target(
                "dalia_margolis",
                "Dalia Margolis",
                "Spymaster and auction host",
                &["Auction Room", "Private Study", "Attic"],
                vec![
                    routine(0, "Auction Room", "Hosting auction", 300, High),
                    routine(300, "Attic Satellite Room", "Using satellite", 120, High),
                ],
                &[
                    "Poisoned champagne",
                    "Chandelier accident",
                    "Laptop bomb",
                    "Exploding phone",
                    "Fiber Wire (after private meeting)",
                ],
            ),
        ],
        disguises: vec![
            disguise(
                "palace_staff",
                "Palace Staff",
                &["Service Areas", "Kitchen", "Basement", "Ground Floor"],
                &["Attic", "Auction Room", "Security Rooms", "Top Floor Penthouse"],
                "Subdue various staff members around palace",
                &["Palace Staff", "Security Guards", "Enforcers"],
            ),
            disguise(
                "security_guard",
                "Security Guard",
                &["Most areas", "Security Room"],
                &["Attic", "Auction Room (without keycard)"],
                "Subdue security guards in various locations",
                &["Security Guards", "Enforcers", "Elite Guards"],
            ),
            disguise(
                "fashion_model",
                "Fashion Model",
                &["Backstage", "Catwalk", "Dressing Rooms"],
                &["Auction Room", "Attic", "Security Rooms", "Staff Areas"],
                "Subdue a fashion model in the dressing rooms or backstage",
                &["Other Models", "Fashion Crew"],
            ),
            disguise(
                "stylist",
                "Stylist",
                &["Backstage", "Dressing Rooms", "Show Areas"],
                &["Attic", "Security Rooms", "Staff Areas"],
                "Subdue a stylist backstage",
                &["Stylists", "Fashion Crew"],
            ),
            disguise(
                "tech_crew",
                "Tech Crew",
                &["Backstage", "Service Areas", "Light Rig Area"],
                &["Attic", "Auction Room", "Security Rooms"],
                "Subdue tech crew members backstage or near stage equipment",
                &["Tech Crew", "Security"],
            ),
            disguise(
                "waiter",
                "Waiter",
                &["Bar Areas", "Kitchen", "Dining Areas", "Ground Floor"],
                &["Attic", "Auction Room", "Security Rooms"],
                "Subdue waiters in bar or dining areas",
                &["Waiters", "Palace Staff"],
            ),
            disguise(
                "auction_staff",
                "Auction Staff",
                &["Auction Room", "Top Floor"],
                &["Attic", "Security Rooms"],
                "Subdue auction staff on the top floor near the auction",
                &["Auction Staff", "Dalia Margolis", "Elite Guards"],
            ),
        ],
        weapons: vec![
            weapon(
                "kitchen_knife",
                "Kitchen Knife",
                WeaponType::Melee,
                true,
                &["Kitchen", "Various service areas"],
            ),
            weapon(
                "auction_pistol",
                "Auction Pistol",
                WeaponType::Firearm,
                true,
                &["Auction Room Display"],
            ),
            weapon(
                "screwdriver",
                "Screwdriver",
                WeaponType::Melee,
                true,
                &["Basement", "Maintenance areas"],
            ),
            weapon(
                "rat_poison",
                "Rat Poison",
                WeaponType::Poison,
                true,
                &["Kitchen", "Basement storage"],
            ),
            weapon(
                "bust",
                "Bust",
                WeaponType::Thrown,
                false,
                &["Various rooms, e.g., attic"],
            ),
        ],
        opportunities: vec![
            opportunity(
                "lights_out",
                "Lights Out",
                "Sabotage the light rig to eliminate Viktor",
                &[
                    "Obtain Palace Staff or Tech Crew disguise",
                    "Access the attic via basement passage or exterior pipes",
                    "Sabotage the light rig winch",
                    "Wait for Viktor to stand under the lights",
                ],
                "palace_staff",
                Opp::Medium,
            ),
            opportunity(
                "bare_knuckle_boxer",
                "Bare Knuckle Boxer",
                "Pose as Helmut Kruger to get close to Dalia",
                &[
                    "Locate Helmut Kruger backstage",
                    "Subdue him and obtain his disguise and invitation",
                    "Meet with Dalia Margolis in private",
                    "Eliminate her when alone",
                ],
                "fashion_model",
                Opp::Hard,
            ),
            opportunity(
                "a_private_meeting",
                "A Private Meeting",
                "Arrange a private meeting with Viktor Novikov by replacing the Sommelier.",
                &[
                    "Locate the Sommelier",
                    "Subdue him and obtain his disguise",
                    "Inform Viktor Novikov about a private wine tasting",
                    "Eliminate Viktor during the private meeting",
                ],
                "palace_staff",
                Opp::Medium,
            ),
        ],
        challenges: vec![
            challenge(
                "piano_man",
                "Piano Man",
                "Eliminate any target with a Fiber Wire.",
                ChallengeType::Assassination,
                4000,
                &["Fiber Wire elimination", "Any target"],
            ),
            silent_assassin("silent_assassin"),
            chameleon("chameleon", "Paris"),
        ],
        mastery: vec![
            mastery(
                "paris",
                5,
                "Lockpick",
                MasteryUnlockType::Equipment,
                "Useful for accessing locked areas.",
            ),
            mastery(
                "paris",
                10,
                "ICA19 Silenced Pistol",
                MasteryUnlockType::Weapon,
                "A silenced pistol for stealth eliminations.",
            ),
            mastery(
                "paris",
                15,
                "Palace Staff Starting Location",
                MasteryUnlockType::StartingLocation,
                "Begin the mission disguised as Palace Staff in the kitchen.",
            ),
            mastery(
                "paris",
                20,
                "Fiber Wire",
                MasteryUnlockType::Equipment,
                "A classic, silent assassination tool.",
            ),
        ],
    }
}

fn sapienza() -> FallbackMission {
    use OpportunityDifficulty as Opp;
    use SecurityLevel::*;

    FallbackMission {
        id: "sapienza".to_string(),
        name: "World of Tomorrow".to_string(),
        location: "Sapienza, Italy".to_string(),
        difficulty: MissionDifficulty::Professional,
        targets: vec![
            target(
                "silvio_caruso",
                "Silvio Caruso",
                "Bioengineer and virus creator",
                &["Villa Caruso", "Laboratory", "Observatory", "Garden", "Morgue"],
                vec![
                    routine(0, "Villa Office", "Working on virus design", 240, Medium),
                    routine(240, "Villa Garden", "Golfing", 120, Low),
                    routine(360, "Morgue", "Visiting mother's grave", 60, Low),
                ],
                &[
                    "Therapy session",
                    "Golf ball accident",
                    "Poisoned spaghetti",
                    "Exploding laptop",
                    "Old axe",
                ],
            ),
            target(
                "francesca_de_santis",
                "Francesca De Santis",
                "Laboratory head and Caruso's assistant",
                &["Villa Office", "Laboratory", "Apartment", "Observatory"],
                vec![
                    routine(0, "Laboratory", "Supervising research", 300, High),
                    routine(300, "Villa Office", "Meeting with Caruso", 90, Medium),
                ],
                &[
                    "DNA scanner trap",
                    "Stalactite accident",
                    "Poisoned coffee",
                    "Exploding prototype",
                ],
            ),
            target(
                "virus",
                "The Virus",
                "Prototype virus to be destroyed",
                &["Underground Laboratory"],
                // Active until destroyed
                vec![routine(0, "Virus Chamber", "Active", 9999, High)],
                &[
                    "Overheating with server spike",
                    "Freezing with emergency cool down",
                    "Explosion with explosives",
                    "Destroying via lab-specific methods",
                ],
            ),
        ],
        disguises: vec![
            disguise(
                "mansion_staff",
                "Mansion Staff",
                &["Villa Service Areas", "Kitchen", "Ground Floor"],
                &["Laboratory", "Caruso Office", "Security Rooms"],
                "Subdue various staff throughout villa",
                &["Mansion Staff", "Security"],
            ),
            disguise(
                "lab_technician",
                "Lab Technician",
                &["Laboratory", "Virus Chamber", "Underground Tunnels"],
                &["Caruso Private Areas", "De Santis Apartment"],
                "Subdue lab personnel in the laboratory area",
                &["Lab Personnel", "Elite Guards"],
            ),
            disguise(
                "chef",
                "Chef",
                &["Kitchen", "Dining Areas", "Staff Areas"],
                &["Laboratory", "Security Rooms"],
                "Subdue chefs in the kitchen",
                &["Chefs", "Mansion Staff"],
            ),
            disguise(
                "gardener",
                "Gardener",
                &["Gardens", "Grounds", "Outskirts of Villa"],
                &["Inside Villa", "Laboratory"],
                "Subdue gardeners in the villa gardens",
                &["Gardeners", "Security"],
            ),
            disguise(
                "private_detective",
                "Private Detective",
                &["Villa Ground Floor", "Villa Upstairs", "Observatory"],
                &["Laboratory", "Security Rooms"],
                "Subdue the detective near the villa entrance or as he investigates",
                &["Security", "Caruso"],
            ),
        ],
        weapons: vec![
            weapon(
                "golf_ball",
                "Golf Ball",
                WeaponType::Accident,
                true,
                &["Golf Course"],
            ),
            weapon("old_axe", "Old Axe", WeaponType::Melee, false, &["Morgue"]),
            weapon(
                "poison_syringe",
                "Poison Syringe",
                WeaponType::Poison,
                true,
                &["Unlockable", "Found in some medical areas"],
            ),
            weapon(
                "wrench",
                "Wrench",
                WeaponType::Melee,
                true,
                &["Maintenance areas", "Kitchen"],
            ),
        ],
        opportunities: vec![
            opportunity(
                "the_author",
                "The Author",
                "Pose as a detective novelist to meet Caruso",
                &[
                    "Obtain the manuscript from the apartment",
                    "Meet with Caruso as the author",
                    "Follow him to his mother's grave",
                    "Push him over the cliff",
                ],
                "private_detective",
                Opp::Medium,
            ),
            opportunity(
                "pest_control",
                "Pest Control",
                "Infiltrate the lab as a pest control worker to destroy the virus.",
                &[
                    "Obtain Pest Control disguise near the town square",
                    "Gain access to the laboratory",
                    "Find and exploit a vulnerability in the virus containment",
                ],
                "lab_technician",
                Opp::Hard,
            ),
            opportunity(
                "dna_dongle",
                "DNA Dongle",
                "Use the DNA dongle to trap Francesca De Santis.",
                &[
                    "Obtain the DNA dongle from a lab technician",
                    "Tamper with the DNA scanner in Francesca's office",
                    "Wait for Francesca to use the scanner",
                ],
                "lab_technician",
                Opp::Medium,
            ),
        ],
        challenges: vec![
            silent_assassin("silent_assassin_sapienza"),
            chameleon("chameleon_sapienza", "Sapienza"),
        ],
        mastery: vec![
            mastery(
                "sapienza",
                5,
                "Sedative Syringe",
                MasteryUnlockType::Equipment,
                "A syringe that can render targets unconscious.",
            ),
            mastery(
                "sapienza",
                10,
                "Remote Explosive",
                MasteryUnlockType::Equipment,
                "A versatile explosive triggered remotely.",
            ),
            mastery(
                "sapienza",
                15,
                "Lab Technician Starting Location",
                MasteryUnlockType::StartingLocation,
                "Begin the mission disguised as a Lab Technician in the underground lab.",
            ),
            mastery(
                "sapienza",
                20,
                "Concealable Baton",
                MasteryUnlockType::Weapon,
                "A discreet melee weapon for non-lethal takedowns.",
            ),
        ],
    }
}

fn dubai() -> FallbackMission {
    use OpportunityDifficulty as Opp;
    use SecurityLevel::*;

    FallbackMission {
        id: "dubai".to_string(),
        name: "On Top of the World".to_string(),
        location: "Dubai, UAE".to_string(),
        difficulty: MissionDifficulty::Professional,
        targets: vec![
            target(
                "carl_ingram",
                "Carl Ingram",
                "Providence Herald, co-founder of the Sceptre project",
                &["Penthouse", "Conference Room", "Art Installation"],
                vec![
                    routine(
                        0,
                        "Penthouse Lounge",
                        "Touring the penthouse, making calls",
                        300,
                        High,
                    ),
                    routine(300, "Conference Room", "Attending a meeting", 180, High),
                ],
                &[
                    "Poisoned whiskey",
                    "Chandelier accident",
                    "Oil rig model impalement",
                    "Falling from balcony",
                ],
            ),
            target(
                "marcus_stuyvesant",
                "Marcus Stuyvesant",
                "Providence Herald, co-founder of the Sceptre project",
                &["Art Installation", "Outdoor Terrace", "Server Room"],
                vec![
                    routine(0, "Art Installation", "Observing the exhibit", 240, High),
                    routine(240, "Outdoor Terrace", "Inspecting security", 120, Medium),
                ],
                &[
                    "Shot during training exercise",
                    "Falling from balcony",
                    "Thrown art piece",
                ],
            ),
        ],
        disguises: vec![
            disguise(
                "event_staff",
                "Event Staff",
                &["Atrium", "Kitchen", "Staff Areas", "Bars"],
                &["Penthouse", "Security Rooms", "Server Room"],
                "Subdue staff members throughout the building",
                &["Event Staff", "Security Guards"],
            ),
            disguise(
                "security_dubai",
                "Security Guard (Dubai)",
                &["Most areas", "Security Rooms", "Helipad"],
                &["Penthouse (specific rooms)"],
                "Subdue security guards",
                &["Elite Security", "Targets"],
            ),
            disguise(
                "penthouse_staff",
                "Penthouse Staff",
                &["Penthouse", "Penthouse Service Areas"],
                &["Security Rooms"],
                "Subdue staff in the penthouse",
                &["Penthouse Guards", "Targets"],
            ),
            disguise(
                "maintenance_dubai",
                "Maintenance (Dubai)",
                &["Server Room", "Maintenance Tunnels", "Ventilation"],
                &["Penthouse Private Areas"],
                "Subdue maintenance workers",
                &["Security", "Other Maintenance"],
            ),
            disguise(
                "pilot",
                "Pilot",
                &["Helipad", "Helipad Access"],
                &["Main building areas"],
                "Subdue the pilot on the helipad",
                &["Security", "Targets (if near helipad)"],
            ),
        ],
        weapons: vec![
            weapon(
                "gold_bar",
                "Gold Bar",
                WeaponType::Thrown,
                false,
                &["Vending machine (after challenge)"],
            ),
            weapon(
                "screwdriver_dubai",
                "Screwdriver",
                WeaponType::Melee,
                true,
                &["Control Room", "Maintenance areas"],
            ),
            weapon(
                "arabic_dagger",
                "Arabic Dagger",
                WeaponType::Melee,
                true,
                &["Penthouse displays"],
            ),
        ],
        opportunities: vec![
            opportunity(
                "how_the_mighty_fall",
                "How The Mighty Fall",
                "Trigger a meeting between both targets for a double assassination opportunity.",
                &[
                    "Gain access to the server room",
                    "Initiate the \"Emergency Meeting\" protocol via the server console",
                    "Wait for both targets to meet in the secure room",
                    "Eliminate them together (e.g., chandelier accident)",
                ],
                "maintenance_dubai",
                Opp::Hard,
            ),
            opportunity(
                "bird_of_prey",
                "Bird of Prey",
                "Pose as Zama \"The Vulture\" Kazem to get close to Carl Ingram.",
                &[
                    "Locate and subdue Zama Kazem",
                    "Obtain his disguise and lethal poison vial",
                    "Meet with Ingram's assistant",
                    "Follow the steps to get Ingram alone for assassination",
                ],
                "security_dubai",
                Opp::Medium,
            ),
            opportunity(
                "insecurity",
                "(In)Security",
                "Assume the role of Marcus Stuyvesant's new bodyguard for a close-quarters assassination.",
                &[
                    "Locate and subdue Marcus Stuyvesant's original bodyguard",
                    "Obtain his disguise",
                    "Report for duty and follow Stuyvesant",
                    "Eliminate Stuyvesant during a private moment or training exercise",
                ],
                "security_dubai",
                Opp::Medium,
            ),
        ],
        challenges: vec![
            challenge(
                "someone_could_hurt_themselves",
                "Someone Could Hurt Themselves",
                "Eliminate a target with an accident.",
                ChallengeType::Assassination,
                1500,
                &["Target eliminated by accident"],
            ),
            challenge(
                "mile_high_drop",
                "Mile High Drop",
                "Eliminate Marcus Stuyvesant by pushing him off the penthouse balcony.",
                ChallengeType::Assassination,
                2000,
                &["Marcus Stuyvesant eliminated", "Fall accident"],
            ),
            silent_assassin("silent_assassin_dubai"),
            chameleon("chameleon_dubai", "Dubai"),
        ],
        mastery: vec![
            mastery(
                "dubai",
                5,
                "Remote EMP Charge",
                MasteryUnlockType::Equipment,
                "An explosive device that can disable electronics discreetly.",
            ),
            mastery(
                "dubai",
                10,
                "ICA Executive Briefcase",
                MasteryUnlockType::Equipment,
                "A discreet way to carry large items into a mission.",
            ),
            mastery(
                "dubai",
                15,
                "Atrium Starting Location",
                MasteryUnlockType::StartingLocation,
                "Begin the mission in the Atrium, disguised as an Event Staff.",
            ),
            mastery(
                "dubai",
                20,
                "Custom 5mm (Pistol)",
                MasteryUnlockType::Weapon,
                "A small, easily concealable pistol.",
            ),
        ],
    }
}

fn dartmoor() -> FallbackMission {
    use OpportunityDifficulty as Opp;
    use SecurityLevel::*;

    FallbackMission {
        id: "dartmoor".to_string(),
        name: "Death in the Family".to_string(),
        location: "Dartmoor, England".to_string(),
        difficulty: MissionDifficulty::Professional,
        targets: vec![
            target(
                "alexa_carlisle",
                "Alexa Carlisle",
                "Former Providence Partner, matriarch of the Carlisle family",
                &["Thornbridge Manor", "Graveyard", "Greenhouse"],
                vec![
                    routine(
                        0,
                        "Thornbridge Manor Office",
                        "Investigating Zachary's death, meeting with detective",
                        300,
                        High,
                    ),
                    routine(300, "Graveyard", "Visiting Zachary's grave", 90, Medium),
                ],
                &[
                    "Push from balcony",
                    "Poisoned tea",
                    "Exploding photography equipment",
                    "Greenhouse explosion",
                ],
            ),
            target(
                "case_file",
                "The Carlisle Case File",
                "Sensitive information on Arthur Edwards, located within Thornbridge Manor.",
                &[
                    "Thornbridge Manor Office Safe",
                    "Butler's Office Safe",
                    "Off-site pickup",
                ],
                vec![routine(
                    0,
                    "Alexa Carlisle's Office",
                    "Secured in safe",
                    9999,
                    High,
                )],
                &[
                    "Safe combination",
                    "Accusation in murder mystery",
                    "Secret token retrieval",
                ],
            ),
        ],
        disguises: vec![
            disguise(
                "detective",
                "Private Investigator",
                &["Most of Thornbridge Manor", "Family Rooms"],
                &["Alexa Carlisle's Office (without specific access)"],
                "Subdue the private investigator near the main gate or inside the manor",
                &["Alexa Carlisle (if she sees you take it)"],
            ),
            disguise(
                "butler",
                "Butler",
                &["Thornbridge Manor (staff areas, some family rooms)"],
                &["Alexa Carlisle's Office", "Security Rooms"],
                "Subdue Mr. Fernsby or another butler",
                &[
                    "Other Butlers",
                    "Alexa Carlisle (if spotted doing suspicious acts)",
                ],
            ),
            disguise(
                "bodyguard_dartmoor",
                "Bodyguard (Dartmoor)",
                &["Most areas", "Security Rooms", "Graveyard"],
                &["Alexa Carlisle's Office"],
                "Subdue bodyguards patrolling the manor",
                &["Other Bodyguards", "Alexa Carlisle"],
            ),
            disguise(
                "photographer",
                "Photographer",
                &["Outdoor areas", "Fountain area", "Greenhouse"],
                &["Inside Manor"],
                "Subdue the photographer near the fountain",
                &["Event Organizers", "Other Photographers"],
            ),
            disguise(
                "gardener_dartmoor",
                "Gardener (Dartmoor)",
                &["Gardens", "Greenhouse", "Outskirts of Manor"],
                &["Inside Manor"],
                "Subdue gardeners in the grounds",
                &["Other Gardeners"],
            ),
        ],
        weapons: vec![
            weapon(
                "cane",
                "Cane",
                WeaponType::Melee,
                false,
                &["Emma and Gregory's room"],
            ),
            weapon(
                "poison_dartmoor",
                "Lethal Poison Vial",
                WeaponType::Poison,
                true,
                &["Greenhouse (after crafting)"],
            ),
            weapon(
                "wrench_dartmoor",
                "Wrench",
                WeaponType::Melee,
                true,
                &["Greenhouse"],
            ),
        ],
        opportunities: vec![
            opportunity(
                "means_motive_and_opportunity",
                "Means, Motive, and Opportunity",
                "Solve the murder mystery as the private investigator to get close to Alexa Carlisle.",
                &[
                    "Subdue the private investigator and take his disguise",
                    "Investigate Zachary Carlisle's death",
                    "Accuse the correct murderer (or frame someone)",
                    "Receive the case file and an opportunity to eliminate Alexa",
                ],
                "detective",
                Opp::Hard,
            ),
            opportunity(
                "a_day_to_remember",
                "A Day to Remember",
                "Sabotage the photography equipment to eliminate Alexa Carlisle.",
                &[
                    "Subdue the photographer and take his disguise",
                    "Gather components for the flash setup",
                    "Tamper with the electrical wiring near the fountain",
                    "Wait for Alexa Carlisle to pose for the photo",
                ],
                "photographer",
                Opp::Medium,
            ),
            opportunity(
                "her_final_resting_place",
                "Her Final Resting Place",
                "Arrange for Alexa Carlisle to visit the family graveyard for a private elimination.",
                &[
                    "Deal with the crows in the graveyard (e.g., shoot nests)",
                    "Inform Alexa Carlisle about the \"prepared\" gravesite",
                    "Wait for her to arrive at the graveyard",
                    "Eliminate her in a secluded manner",
                ],
                "gardener_dartmoor",
                Opp::Medium,
            ),
        ],
        challenges: vec![
            silent_assassin("silent_assassin_dartmoor"),
            chameleon("chameleon_dartmoor", "Dartmoor"),
            challenge(
                "a_matter_of_justice",
                "A Matter of Justice",
                "Accuse the real murderer in \"Means, Motive, and Opportunity\".",
                ChallengeType::Feats,
                1500,
                &["Complete \"Means, Motive, and Opportunity\" correctly accusing Emma Carlisle"],
            ),
        ],
        mastery: vec![
            mastery(
                "dartmoor",
                5,
                "Remote EMP Device (Fragile)",
                MasteryUnlockType::Equipment,
                "A single-use remote EMP device.",
            ),
            mastery(
                "dartmoor",
                10,
                "Classic Cut Throat (Melee)",
                MasteryUnlockType::Weapon,
                "A classic straight razor for silent melee kills.",
            ),
            mastery(
                "dartmoor",
                15,
                "Private Investigator Starting Location",
                MasteryUnlockType::StartingLocation,
                "Begin the mission as the Private Investigator, arriving at the manor gate.",
            ),
            mastery(
                "dartmoor",
                20,
                "Wrench",
                MasteryUnlockType::Equipment,
                "A tool for sabotaging various objects.",
            ),
        ],
    }
}
