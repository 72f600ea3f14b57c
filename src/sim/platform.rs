//! Static platforms and the registry that holds them

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Stable identity of a platform, assigned at level load
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlatformId(pub u32);

/// A solid rectangle the player collides with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: PlatformId,
    pub rect: Rect,
    /// Cosmetic only
    pub color: [u8; 3],
}

/// Ordered set of platforms (sorted by id for deterministic iteration)
///
/// The collision step only reads it; the glitch director temporarily takes
/// one platform out and later puts it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformRegistry {
    platforms: Vec<Platform>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn get(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PlatformId) -> bool {
        self.get(id).is_some()
    }

    /// Insert a platform keeping id order. A platform with the same id is replaced.
    pub fn insert(&mut self, platform: Platform) {
        match self.platforms.binary_search_by_key(&platform.id, |p| p.id) {
            Ok(i) => self.platforms[i] = platform,
            Err(i) => self.platforms.insert(i, platform),
        }
    }

    /// Take the platform at registry position `index` out of the world
    pub fn remove_at(&mut self, index: usize) -> Option<Platform> {
        (index < self.platforms.len()).then(|| self.platforms.remove(index))
    }

    /// Platforms whose interior intersects `rect`, in registry order
    pub fn overlapping<'a>(&'a self, rect: &'a Rect) -> impl Iterator<Item = &'a Platform> + 'a {
        self.platforms.iter().filter(move |p| p.rect.overlaps(rect))
    }

    pub fn any_overlap(&self, rect: &Rect) -> bool {
        self.overlapping(rect).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(id: u32, x: f32) -> Platform {
        Platform {
            id: PlatformId(id),
            rect: Rect::new(x, 100.0, 50.0, 10.0),
            color: [0, 255, 0],
        }
    }

    #[test]
    fn test_remove_and_restore_keeps_order() {
        let mut registry = PlatformRegistry::new();
        for id in 0..3 {
            registry.insert(platform(id, id as f32 * 100.0));
        }

        let removed = registry.remove_at(1).unwrap();
        assert_eq!(removed.id, PlatformId(1));
        assert_eq!(registry.len(), 2);
        assert!(!registry.contains(PlatformId(1)));

        registry.insert(removed);
        let ids: Vec<_> = registry.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut registry = PlatformRegistry::new();
        registry.insert(platform(0, 0.0));
        assert!(registry.remove_at(3).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_overlapping_query() {
        let mut registry = PlatformRegistry::new();
        registry.insert(platform(0, 0.0));
        registry.insert(platform(1, 200.0));

        let probe = Rect::new(30.0, 95.0, 40.0, 10.0);
        let hits: Vec<_> = registry.overlapping(&probe).map(|p| p.id).collect();
        assert_eq!(hits, vec![PlatformId(0)]);
        assert!(!registry.any_overlap(&Rect::new(100.0, 0.0, 10.0, 10.0)));
    }
}
