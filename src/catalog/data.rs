//! The compiled-in script catalog.
//!
//! Two categories, each with its home-card metadata and ordered scripts.
//! The script `content` strings are stored verbatim and never interpreted.

use super::{Catalog, Category, CategoryInfo, Difficulty, Script};

fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_string()).collect()
}

pub fn builtin() -> Catalog {
    Catalog::from_categories(vec![
        Category {
            info: CategoryInfo {
                key: "gtps".to_string(),
                title: "GTPS Scripts".to_string(),
                blurb: "Advanced automation scripts for GTPS with safety features and optimization"
                    .to_string(),
                highlights: strings(&["Farming", "Teleport", "Safety"]),
            },
            scripts: vec![
                Script {
                    name: "Auto Farm GTPS".to_string(),
                    description:
                        "Automatically farms resources in GTPS with advanced detection and safety features"
                            .to_string(),
                    content: AUTO_FARM_GTPS.to_string(),
                    category: "gtps".to_string(),
                    difficulty: Difficulty::Intermediate,
                    tags: strings(&["automation", "farming", "safety"]),
                },
                Script {
                    name: "Teleport System".to_string(),
                    description:
                        "Advanced teleportation system with saved locations and safety checks"
                            .to_string(),
                    content: TELEPORT_SYSTEM.to_string(),
                    category: "gtps".to_string(),
                    difficulty: Difficulty::Advanced,
                    tags: strings(&["teleport", "movement", "smooth"]),
                },
            ],
        },
        Category {
            info: CategoryInfo {
                key: "rgt".to_string(),
                title: "RGT Scripts".to_string(),
                blurb:
                    "Professional enhancement scripts for RGT with anti-detection and smart features"
                        .to_string(),
                highlights: strings(&["Speed", "Auto Complete", "Smart"]),
            },
            scripts: vec![
                Script {
                    name: "Speed Enhancement".to_string(),
                    description:
                        "Professional speed modification with customizable settings and anti-detection"
                            .to_string(),
                    content: SPEED_ENHANCEMENT.to_string(),
                    category: "rgt".to_string(),
                    difficulty: Difficulty::Advanced,
                    tags: strings(&["speed", "anti-detection", "gradual"]),
                },
                Script {
                    name: "Auto Complete System".to_string(),
                    description:
                        "Intelligent level completion with pattern recognition and timing optimization"
                            .to_string(),
                    content: AUTO_COMPLETE_SYSTEM.to_string(),
                    category: "rgt".to_string(),
                    difficulty: Difficulty::Intermediate,
                    tags: strings(&["automation", "completion", "objectives"]),
                },
            ],
        },
    ])
}

const AUTO_FARM_GTPS: &str = r#"-- Auto Farm GTPS Script v2.0
-- Advanced farming with safety checks
local Players = game:GetService("Players")
local RunService = game:GetService("RunService")

local player = Players.LocalPlayer
local farming = false

function autoFarm()
    farming = true
    while farming do
        -- Safety check
        if not player.Character then
            wait(1)
            continue
        end

        print("🌾 Farming resources...")
        -- Add your farming logic here
        wait(2)
    end
end

function stopFarm()
    farming = false
    print("⏹️ Farming stopped")
end

-- Start farming
autoFarm()"#;

const TELEPORT_SYSTEM: &str = r#"-- Advanced Teleport System
local Players = game:GetService("Players")
local TweenService = game:GetService("TweenService")

local player = Players.LocalPlayer
local savedLocations = {}

function teleport(position, smooth)
    if not player.Character or not player.Character:FindFirstChild("HumanoidRootPart") then
        return false
    end

    local hrp = player.Character.HumanoidRootPart

    if smooth then
        local tween = TweenService:Create(hrp,
            TweenInfo.new(1, Enum.EasingStyle.Quad),
            {CFrame = CFrame.new(position)}
        )
        tween:Play()
    else
        hrp.CFrame = CFrame.new(position)
    end

    print("✈️ Teleported to: " .. tostring(position))
    return true
end

-- Example usage
teleport(Vector3.new(0, 50, 0), true)"#;

const SPEED_ENHANCEMENT: &str = r#"-- Speed Enhancement System v3.0
local Players = game:GetService("Players")
local RunService = game:GetService("RunService")

local player = Players.LocalPlayer
local defaultSpeed = 16
local currentSpeed = defaultSpeed

function setSpeed(newSpeed)
    if not player.Character or not player.Character:FindFirstChild("Humanoid") then
        return false
    end

    local humanoid = player.Character.Humanoid
    currentSpeed = math.clamp(newSpeed, 0, 100)
    humanoid.WalkSpeed = currentSpeed

    print("🏃 Speed set to: " .. currentSpeed)
    return true
end

function resetSpeed()
    setSpeed(defaultSpeed)
    print("🔄 Speed reset to default")
end

-- Gradual speed increase (anti-detection)
function gradualSpeedIncrease(targetSpeed, duration)
    local startSpeed = currentSpeed
    local startTime = tick()

    local connection
    connection = RunService.Heartbeat:Connect(function()
        local elapsed = tick() - startTime
        local progress = math.min(elapsed / duration, 1)

        local newSpeed = startSpeed + (targetSpeed - startSpeed) * progress
        setSpeed(newSpeed)

        if progress >= 1 then
            connection:Disconnect()
        end
    end)
end

-- Example: Gradually increase to speed 25 over 3 seconds
gradualSpeedIncrease(25, 3)"#;

const AUTO_COMPLETE_SYSTEM: &str = r#"-- Auto Complete System v2.0
local Players = game:GetService("Players")
local Workspace = game:GetService("Workspace")

local player = Players.LocalPlayer
local completing = false

function findObjectives()
    local objectives = {}
    -- Add logic to find level objectives
    for _, obj in pairs(Workspace:GetDescendants()) do
        if obj.Name:match("Objective") or obj.Name:match("Goal") then
            table.insert(objectives, obj)
        end
    end
    return objectives
end

function autoComplete()
    completing = true
    print("🎯 Starting auto completion...")

    while completing do
        local objectives = findObjectives()

        if #objectives == 0 then
            print("✅ Level completed!")
            break
        end

        for _, objective in pairs(objectives) do
            if objective and objective.Parent then
                -- Simulate interaction
                print("🔄 Completing objective: " .. objective.Name)
                -- Add your completion logic here
                wait(0.5)
            end
        end

        wait(1)
    end
end

function stopCompletion()
    completing = false
    print("⏹️ Auto completion stopped")
end

-- Start auto completion
autoComplete()"#;
