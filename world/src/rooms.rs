use glam::{IVec2, ivec2};

/// Display name entry for one room, keyed by world coordinate.
///
/// Names come from the game's Rooms_Normal.xml. A few rooms carry a
/// second line shown on the in-game pause map, kept here as data even
/// though the world map renderer only draws `name`.
#[derive(Debug)]
pub struct RoomDescriptor {
    pub pos: IVec2,
    pub name: &'static str,
    pub subtitle: Option<&'static str>,
}

const fn room(x: i32, y: i32, name: &'static str) -> RoomDescriptor {
    RoomDescriptor {
        pos: ivec2(x, y),
        name,
        subtitle: None,
    }
}

const fn room_sub(
    x: i32,
    y: i32,
    name: &'static str,
    subtitle: &'static str,
) -> RoomDescriptor {
    RoomDescriptor {
        pos: ivec2(x, y),
        name,
        subtitle: Some(subtitle),
    }
}

/// Room names for the shipping world map. The first entry is the
/// fallback for coordinates the table does not cover.
#[rustfmt::skip]
static DESCRIPTORS: [RoomDescriptor; 150] = [
    room(99, 99, "-- !!!Undocumented room!!! -- "),

    room(-10, 2, "Slippery Slope"),
    room(-10, 3, "Nice of You to Drop In"),

    room(-9, 2, "Hollow King"),
    room(-9, 3, "Foot of the Throne"),
    room(-9, 4, "Welcome to the Underground"),
    room(-9, 5, "Long Way Down"),
    room(-9, 6, "Secret Passage"),

    room(-8, 0, "-- OUT OF BOUNDS maps, legends --"),
    room(-8, 1, "Maps and Legends"),
    room_sub(-8, 2, "Cerulean Aura", " - Activates Blue Ghost Blocks -"),
    room(-8, 3, "Mind the Gap"),
    room(-8, 4, "Rock Transept"),
    room(-8, 5, "Avalon Calling"),
    room(-8, 6, "The Crab Cake Is a Lie"),

    room(-7, 0, "-- OUT OF BOUNDS yggdrasil --"),
    room(-7, 1, "Yggdrasil"),
    room(-7, 2, "Covert Operators"),
    room(-7, 3, "I Wonder Where This Goes"),
    room(-7, 4, "Aqueous Humor"),
    room(-7, 5, "Et in Aether ego"),
    room(-7, 6, "Be Seeing You"),

    room(-6, 0, "-- OUT OF BOUNDS grand vault --"),
    room(-6, 1, "The Grand Vault"),
    room(-6, 2, "The Quarry Hub"),
    room(-6, 3, "Pit Stop"),
    room(-6, 4, "Like Ivy, Twisting"),
    room(-6, 5, "It's More Scared of You"),
    room(-6, 6, "Hidden Crevasse"),

    room(-5, -4, "-- OUT OF BOUNDS silver moon --"),
    room(-5, -3, "A Sickly Silver Moon"),
    room(-5, -2, "Before the Crash"),
    room(-5, -1, "Hold On Tight and Don't Look Down"),
    room(-5, 0, "Hydra Is Myth"),
    room(-5, 1, "Artisan Stone Walls"),
    room(-5, 2, "Cave In"),
    room(-5, 3, "Obvious Movie Quote"),
    room(-5, 4, "A Dream of a Memory"),
    room(-5, 5, "Mine Shaft"),
    room(-5, 6, "Forgotten Tunnels"),

    room(-4, -4, "-- OUT OF BOUNDS used to live --"),
    room(-4, -3, "This Is Where We Used to Live"),
    room(-4, -2, "A Brief Respite"),
    room(-4, -1, "The Coin and the Courage"),
    room(-4, 0, "Arcane Vocabulary"),
    room(-4, 1, "Venn's Banality"),
    room(-4, 2, "Crawlspace"),
    room(-4, 3, "Don't Be Hasty"),
    room(-4, 4, "A Memory of a Dream"),
    room(-4, 5, "Green Man"),
    room(-4, 6, "Descent"),

    room(-3, -4, "-- OUT OF BOUNDS catastrophe --"),
    room(-3, -3, "Catharsis in Catastrophe"),
    room(-3, -2, "Hardcore Prawn"),
    room(-3, -1, "Exit Strategy"),
    room(-3, 0, "You Have to Start the Game"),
    room(-3, 1, "Hops and Skips"),
    room(-3, 2, "Never Could See Any Other Way"),
    room(-3, 3, "You Definitely Shouldn't Go Left"),
    room(-3, 4, "Rawr!"),
    room_sub(-3, 5, "Springheel Boots", " - Jump Again in Midair -"),
    room(-3, 6, "The Arbitrarium"),

    room(-2, -3, "Linchpin"),
    room(-2, -2, "Point of No Return"),
    room(-2, -1, "Playing with Fire"),
    room(-2, 0, "KISS Principle"),
    room(-2, 1, "Leaps and Bounds"),
    room(-2, 2, "Pit of Spikes"),
    room(-2, 3, "Tower of Sorrows"),
    room(-2, 4, "Tower of Regrets"),
    room(-2, 5, "Back to the Surface"),

    room(-1, -4, "-- OUT OF BOUNDS Warp Left --"),
    room(-1, -3, "Speak Now..."),
    room(-1, -2, "Open Sesame"),
    room(-1, -1, "From Another World"),
    room(-1, 0, "Snake, It's a Snake"),
    room(-1, 1, "Swimming Upstream"),
    room(-1, 2, "Subterranea"),
    room(-1, 3, "Contrived Lock/Key Mechanisms"),
    room(-1, 4, "Falling Into a Greener Life"),

    room(0, -4, "-- OUT OF BOUNDS Warp Middle --"),
    room(0, -3, "Consolation Prize"),
    room(0, -2, "Eponymous"),
    room(0, -1, "Harbinger"),
    room(0, 0, "Treasure Hunt"),
    room(0, 1, "Abstract Bridge"),
    room(0, 2, "Which Path Will I Take?"),
    room(0, 3, "Bat Cave"),
    room(0, 4, "Euclid Shrugged"),

    room(1, -4, "-- OUT OF BOUNDS Warp Right --"),
    room(1, -1, "Taking the Long Way"),
    room(1, 0, "Danger"),
    room(1, 1, "Not All Those Who Wander Are Lost"),
    room(1, 2, "Cognitive Resonance"),
    room(1, 3, "Functional Spelæology"),
    room(1, 4, "Circular Logic"),

    room(2, 0, "Leap of Faith"),
    room(2, 1, "Stick the Landing"),
    room(2, 2, "Precarious Footholds"),
    room(2, 3, "Fungal Forest"),
    room(2, 4, "Prawn Shot First"),

    room(3, -4, "Spiral Out"),
    room(3, -3, "Keep Going"),
    room(3, 0, "On the Count of Three"),
    room(3, 1, "Mushroom Staircase"),
    room(3, 2, "Transplants"),
    room(3, 3, "The Proper Motivation"),
    room(3, 4, "Fish Out of Water"),
    room(3, 5, "Abandoned Alcove"),
    room(3, 6, "yeah but why u jelly tho"),
    room(3, 7, "-- OUT OF BOUNDS jelly tho -- "),

    room(4, -5, "The Books Will Not"),
    room(4, -4, "Know Our Names"),
    room(4, -3, "Are You Watching Closely?"),
    room(4, 0, "Does Whatever A Spider Does"),
    room(4, 1, "Eden Maw"),
    room(4, 2, "Under Construction"),
    room(4, 3, "Remnants of a Past Unknown"),
    room(4, 4, "Castle Rock"),
    room(4, 5, "Observation Deck"),
    room(4, 6, "Wellspring"),

    room(5, -3, "The Solo From Oaks"),
    room(5, -2, "No Fun Without the Danger"),
    room(5, 0, "Attic Storeroom"),
    room(5, 1, "Vestibule"),
    room(5, 2, "Shelter from the Storm"),
    room(5, 3, "Ghosts"),
    room(5, 4, "Uncertain Semiotics"),
    room(5, 5, "Don't Get Snippy With Me"),
    room_sub(5, 6, "Crimson Aura", "- Activates Red Ghost Blocks -"),

    room(6, -3, "Loaded Dice"),
    room(6, 0, "Clarity Comes in Waves"),
    room(6, 1, "Great Hall"),
    room(6, 2, "Cave Painting"),
    room(6, 3, "The Loneliest Corner"),
    room(6, 4, "Rough Landing"),
    room(6, 5, "Bring a Mallet"),
    room(6, 6, "Dire Crab"),

    room(7, -3, "Re: Volver"),
    room(7, -1, "An Even 0x80"),
    room(7, 0, "The Floor Is Lava"),
    room(7, 1, "Hollow King Transformed"),
    room(7, 2, "Worth It?"),
    room(7, 3, "Secret Cat Level"),
    room(7, 4, "Feline Foreshadowing"),

    room(8, -3, "Melancholy"),
    room(8, -2, "Sadness"),
    room(8, 0, "Brazen Machines"),
    room_sub(8, 1, "Spider Gloves", "'- Cling to Walls and Leap Off -"),
    room(8, 2, "Not Worth It!"),
];

/// Look up the descriptor for a room coordinate, falling back to the
/// undocumented-room sentinel.
pub fn descriptor(pos: IVec2) -> &'static RoomDescriptor {
    DESCRIPTORS[1..]
        .iter()
        .find(|d| d.pos == pos)
        .unwrap_or(&DESCRIPTORS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups() {
        assert_eq!(descriptor(ivec2(0, 0)).name, "Treasure Hunt");
        assert_eq!(descriptor(ivec2(1, 0)).name, "Danger");
        assert_eq!(
            descriptor(ivec2(8, 1)).subtitle,
            Some("'- Cling to Walls and Leap Off -")
        );

        // Unknown coordinates fall back to the sentinel.
        let unknown = descriptor(ivec2(100, 100));
        assert!(unknown.name.contains("Undocumented"));
        assert_eq!(unknown.pos, ivec2(99, 99));
    }

    #[test]
    fn names_fit_label_row() {
        for d in &DESCRIPTORS {
            assert!(d.name.chars().count() <= 40, "{:?}", d.name);
        }
    }

    #[test]
    fn coordinates_are_unique() {
        for (i, a) in DESCRIPTORS[1..].iter().enumerate() {
            for b in &DESCRIPTORS[i + 2..] {
                assert_ne!(a.pos, b.pos, "{} / {}", a.name, b.name);
            }
        }
    }
}
