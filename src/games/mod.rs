pub mod memory;

pub struct GameDescriptor
{
    pub name: &'static str,
    pub description: &'static str,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![GameDescriptor {
        name: "memory",
        description: "Flip cards two at a time and find every pair",
    }]
}
