// ABOUTME: Built-in drill reference catalog covering every pickleball skill area
// ABOUTME: Static data only; eligibility filtering lives in the parent module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::models::{Drill, SkillArea};

/// Reference drills in declaration order; filter results preserve this order
pub static BUILTIN_DRILLS: &[Drill] = &[
    // Dinking
    Drill {
        name: "Cross-Court Dink Rally",
        description: "With a partner, rally dinks cross-court (forehand to forehand). Focus on keeping the ball below the net height and placing it in the kitchen. Count consecutive dinks — aim for 30+.",
        coaching_tip: Some("Stay low with bent knees. Use your legs, not your wrist. Soft grip pressure (3/10)."),
        variation: Some("Switch to backhand cross-court. Then alternate forehand/backhand every 5 dinks."),
        duration: 10,
        skill: SkillArea::Dinking,
        min_rating: 2.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Figure-8 Dinking Pattern",
        description: "Two players alternate dinking to each other's forehand and backhand, creating a figure-8 pattern. Start slow and increase pace as comfort builds.",
        coaching_tip: Some("Move your feet to the ball — don't reach. Stay balanced on the balls of your feet."),
        variation: Some("Add a 'speed up' rule: after 10 dinks, one player can speed up and the other must reset."),
        duration: 10,
        skill: SkillArea::Dinking,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Dink & Attack Decision Making",
        description: "Rally dinks with a partner. When you see a dink pop up above the net, attack it. When it's below, keep dinking. Focus on shot selection patience.",
        coaching_tip: Some("The biggest dinking mistake is attacking too early. If the ball is below the net — be patient."),
        variation: Some("Play points starting from a dink rally. First to force an error or hit a winner."),
        duration: 15,
        skill: SkillArea::Dinking,
        min_rating: 3.5,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Wall Dink Practice",
        description: "Stand 7 feet from a wall and practice dinking softly against it. Focus on a consistent contact point and soft hands. Alternate forehand and backhand every 10 hits.",
        coaching_tip: Some("This is about touch and control. If the ball bounces back too hard, you're hitting too hard."),
        variation: None,
        duration: 8,
        skill: SkillArea::Dinking,
        min_rating: 2.0,
        max_rating: 3.5,
        youth_friendly: true,
    },
    // Drives & Power
    Drill {
        name: "Drive & Reset Drill",
        description: "Partner at kitchen, you at baseline. Hit hard drives at your partner who practices blocking/resetting. Switch roles after 10 drives. Focus on consistent drive placement.",
        coaching_tip: Some("Aim for your opponent's hip area — hardest spot to return. Keep drives low over the net."),
        variation: Some("Add targets: 5 to forehand side, 5 to backhand side, 5 at the body."),
        duration: 12,
        skill: SkillArea::Drives,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Forehand Drive Consistency",
        description: "From mid-court, feed yourself balls and hit forehand drives to a target zone (backhand corner). Focus on 80% power with 100% consistency. Track how many out of 20 hit the target.",
        coaching_tip: Some("Power comes from rotation, not arm. Turn your shoulders and follow through to your target."),
        variation: Some("Add a step: shuffle to the ball before driving. Simulates real game movement."),
        duration: 10,
        skill: SkillArea::Drives,
        min_rating: 2.5,
        max_rating: 5.0,
        youth_friendly: true,
    },
    Drill {
        name: "Counter-Drive Battle",
        description: "Both players at baseline. Rally hard drives back and forth. Focus on staying in the rally with controlled power. First to 11 errors loses.",
        coaching_tip: Some("Keep your paddle up and out front. If drives are going long, close your paddle face slightly."),
        variation: None,
        duration: 10,
        skill: SkillArea::Drives,
        min_rating: 3.5,
        max_rating: 6.0,
        youth_friendly: true,
    },
    // Serves & Returns
    Drill {
        name: "Serve Placement Challenge",
        description: "Place 4 targets (towels) in each corner of the service box. Hit 5 serves to each target. Track your accuracy. Goal: hit 12+ out of 20.",
        coaching_tip: Some("Consistent toss + consistent contact point = consistent serve. Don't rush your service motion."),
        variation: Some("Add a deep serve target (within 2 feet of the baseline). Deep serves are the most effective."),
        duration: 12,
        skill: SkillArea::Serves,
        min_rating: 2.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Deep Return Practice",
        description: "Have a partner serve to you. Focus on returning deep — past the NVZ line, ideally to the baseline. Count how many returns land in the back third of the court.",
        coaching_tip: Some("Step into the return. Contact the ball out front. Return deep to neutralize the serve advantage."),
        variation: Some("Practice return & advance: return deep and immediately move to the kitchen line."),
        duration: 10,
        skill: SkillArea::Serves,
        min_rating: 2.5,
        max_rating: 5.0,
        youth_friendly: true,
    },
    Drill {
        name: "Power Serve Development",
        description: "Practice generating topspin on your serve. Focus on low-to-high paddle path and hitting through the ball. Aim for the baseline with enough pace to push the returner back.",
        coaching_tip: Some("A good serve doesn't need to be an ace. A deep, heavy serve that forces a weak return is more valuable."),
        variation: Some("Mix in soft, short serves to keep your opponent guessing."),
        duration: 10,
        skill: SkillArea::Serves,
        min_rating: 3.5,
        max_rating: 6.0,
        youth_friendly: false,
    },
    // Volleys
    Drill {
        name: "Rapid Volley Exchange",
        description: "Both players at the kitchen line, 7 feet apart. Volley back and forth as fast as possible — no bounces. Focus on keeping your paddle up and using short, compact swings.",
        coaching_tip: Some("Paddle up, wrist firm, out in front of your body. Absorb don't swing. Think 'catch and redirect.'"),
        variation: Some("Do forehand-only for 1 minute, backhand-only for 1 minute, then mix."),
        duration: 8,
        skill: SkillArea::Volleys,
        min_rating: 2.5,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "2-on-1 Volley Drill",
        description: "One player at the kitchen vs two players on the other side. The solo player must redirect volleys to both opponents. Great for reaction time and placement.",
        coaching_tip: Some("The solo player should focus on depth of volley — push opponents back when possible."),
        variation: Some("Rotate positions every 2 minutes so everyone gets solo time."),
        duration: 12,
        skill: SkillArea::Volleys,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Block Volley Defense",
        description: "Partner feeds hard drives at you while you're at the kitchen line. Practice blocking volleys — absorbing pace and redirecting soft and low. Focus on staying balanced.",
        coaching_tip: Some("Don't swing at hard shots. Just present your paddle face and let the ball do the work."),
        variation: None,
        duration: 10,
        skill: SkillArea::Volleys,
        min_rating: 3.0,
        max_rating: 5.5,
        youth_friendly: true,
    },
    // Third Shot Drops
    Drill {
        name: "Drop Shot Ladder",
        description: "Start at the kitchen line dropping into the kitchen. After 5 successful drops, step back 3 feet. Repeat until you're at the baseline. Goal: consistent drops from every distance.",
        coaching_tip: Some("The third shot drop is a lift, not a hit. Push from your legs, follow through upward."),
        variation: Some("Have a partner at the net calling 'in kitchen' or 'too high' to give real-time feedback."),
        duration: 15,
        skill: SkillArea::Drops,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Drop vs Drive Decision",
        description: "Partner feeds from the kitchen. Based on the feed (high/low, fast/slow), decide whether to hit a drop or a drive. Low balls = drop, high balls = drive.",
        coaching_tip: Some("Don't try to drop everything. If the ball is above your waist at contact, driving is often better."),
        variation: Some("Play the point out after each shot to practice transitioning."),
        duration: 12,
        skill: SkillArea::Drops,
        min_rating: 3.5,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Bucket Drop Practice",
        description: "Place a bucket or target in the kitchen. From mid-court, practice dropping balls into/near the bucket. Track accuracy out of 20 attempts.",
        coaching_tip: Some("Arc is your friend. A good drop peaks on YOUR side of the net and falls into the kitchen."),
        variation: None,
        duration: 10,
        skill: SkillArea::Drops,
        min_rating: 2.5,
        max_rating: 4.5,
        youth_friendly: true,
    },
    // Lobs & Overheads
    Drill {
        name: "Lob & Overhead Combo",
        description: "One player at the kitchen practices offensive lobs. The other player practices overhead smashes. Alternate roles. Focus on lob height and placement (over backhand side).",
        coaching_tip: Some("A good lob should be just barely out of reach. Too high gives them time to set up an overhead."),
        variation: Some("Make it a game: lobber gets a point if overhead misses, smasher gets a point for a put-away."),
        duration: 12,
        skill: SkillArea::Lobs,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Overhead Footwork Drill",
        description: "Partner feeds lobs alternating between left and right. Practice shuffling back, getting set, and hitting overheads. Focus on getting behind the ball.",
        coaching_tip: Some("Turn sideways, shuffle back (don't backpedal), point at the ball with your non-paddle hand."),
        variation: None,
        duration: 10,
        skill: SkillArea::Lobs,
        min_rating: 3.0,
        max_rating: 5.5,
        youth_friendly: true,
    },
    // Footwork & Positioning
    Drill {
        name: "Kitchen Line Shuffle Drill",
        description: "Side shuffle along the kitchen line, touching each sideline. Do 10 reps as fast as possible. Then add a split step and volley after each shuffle.",
        coaching_tip: Some("Stay low. Small, quick steps. Never cross your feet. Always face the net."),
        variation: Some("Add a ball feed: shuffle to position, hit a volley, shuffle to next position."),
        duration: 8,
        skill: SkillArea::Footwork,
        min_rating: 2.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Split Step Timing",
        description: "Practice the split step: as your opponent contacts the ball, do a small hop to land balanced on both feet. Have a partner feed random shots — your job is to split step before each one.",
        coaching_tip: Some("The split step is the single most important movement in pickleball. Time it with your opponent's contact."),
        variation: None,
        duration: 8,
        skill: SkillArea::Footwork,
        min_rating: 2.5,
        max_rating: 5.0,
        youth_friendly: true,
    },
    Drill {
        name: "Transition Zone Movement",
        description: "Start at baseline. Hit a 3rd shot drop, then advance to the kitchen using 2-3 steps with a split step before each shot. Practice the advance pattern until it's automatic.",
        coaching_tip: Some("Don't run straight to the kitchen. Move in stages: drop → advance → split step → volley/drop → advance."),
        variation: None,
        duration: 12,
        skill: SkillArea::Footwork,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    // Strategy
    Drill {
        name: "Stacking Practice (Doubles)",
        description: "Practice stacking formations with your partner. Work through: standard stack, I-formation, and switch patterns. Run 5 points from each formation.",
        coaching_tip: Some("Stacking keeps your strongest side (forehand) in the middle. Communication with your partner is key."),
        variation: None,
        duration: 15,
        skill: SkillArea::Strategy,
        min_rating: 3.5,
        max_rating: 6.0,
        youth_friendly: false,
    },
    Drill {
        name: "Pattern Play: Middle Attack",
        description: "Play points where you intentionally aim every attackable ball down the middle (between opponents). Track how often this creates confusion or errors.",
        coaching_tip: Some("In doubles, the middle is the most effective target. It creates confusion about who takes it."),
        variation: Some("Alternate: 5 points attacking the middle, 5 points attacking the sidelines. Compare success rates."),
        duration: 12,
        skill: SkillArea::Strategy,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Scoreboard Pressure Simulation",
        description: "Play games to 11, but start at various scores (8-8, 9-10, etc). Practice performing under pressure scenarios. Focus on shot selection when points matter most.",
        coaching_tip: Some("In pressure situations, go back to your strengths. Don't try hero shots — solid execution wins."),
        variation: None,
        duration: 15,
        skill: SkillArea::Strategy,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    // Transition Zone
    Drill {
        name: "No-Volley Zone Approach",
        description: "Start at baseline. Feed a ball to yourself, hit a drop, and approach the kitchen in 2-3 controlled steps. Hit a volley/reset on the way up. Repeat 15 times.",
        coaching_tip: Some("The transition zone is where most points are lost. Move slowly and controlled — don't sprint."),
        variation: None,
        duration: 12,
        skill: SkillArea::Transitions,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Mid-Court Survival Drill",
        description: "Stand in the transition zone (between baseline and kitchen). Partner feeds fast shots at your feet. Practice half-volleys and resets. Goal: get 10 consecutive resets into the kitchen.",
        coaching_tip: Some("Bend your knees deeply. Paddle face open. Absorb and redirect — don't fight the ball."),
        variation: None,
        duration: 10,
        skill: SkillArea::Transitions,
        min_rating: 3.5,
        max_rating: 6.0,
        youth_friendly: true,
    },
    // Resets & Defense
    Drill {
        name: "Reset Under Pressure",
        description: "Partner at the kitchen hitting speed-ups at you. Your job: reset every ball softly into the kitchen. Track consecutive resets. Goal: 10+ in a row.",
        coaching_tip: Some("Soft grip, absorb the energy. Your paddle should barely move — use the opponent's pace against them."),
        variation: Some("Partner varies the speed and placement to simulate unpredictable attacks."),
        duration: 12,
        skill: SkillArea::Resets,
        min_rating: 3.0,
        max_rating: 6.0,
        youth_friendly: true,
    },
    Drill {
        name: "Defensive Lob Recovery",
        description: "Partner at kitchen hitting overheads at you. Practice retrieving/getting them back in play and resetting the point. Focus on getting into defensive position and neutralizing.",
        coaching_tip: Some("When lobbed over, don't try to win the point — just get it back deep and get to the kitchen."),
        variation: None,
        duration: 10,
        skill: SkillArea::Resets,
        min_rating: 3.0,
        max_rating: 5.5,
        youth_friendly: true,
    },
    Drill {
        name: "Erne Defense Drill",
        description: "Practice defending against erne attempts. Partner fakes erning from the sideline while you redirect your dink to the open court or lob over.",
        coaching_tip: Some("When you see an erne coming, go behind them or lob. Don't dink to the sideline they're attacking from."),
        variation: None,
        duration: 10,
        skill: SkillArea::Resets,
        min_rating: 4.0,
        max_rating: 6.0,
        youth_friendly: false,
    },
];
