//! Built-in question bank and emotion metadata.

use crate::content::types::{EmotionInfo, EmotionTag, MessageCategory, QuestionRecord, Verdict};

static EMOTIONS: [EmotionInfo; 6] = [
    EmotionInfo {
        tag: EmotionTag::Fear,
        emoji: "😰",
        description: "Makes you worry about loss, punishment, or danger",
        examples: &["Blocked account", "Arrest", "Penalty", "Hacked"],
    },
    EmotionInfo {
        tag: EmotionTag::Urgency,
        emoji: "⏰",
        description: "Pushes you to act quickly without thinking",
        examples: &["Now", "Today only", "Last chance", "10 minutes left"],
    },
    EmotionInfo {
        tag: EmotionTag::Greed,
        emoji: "💰",
        description: "Promises money, rewards, or benefits",
        examples: &["Cashback", "Prize", "Free money", "High returns"],
    },
    EmotionInfo {
        tag: EmotionTag::Authority,
        emoji: "🏛️",
        description: "Uses names of banks, government, or companies",
        examples: &["PNB", "RBI", "Police", "Amazon", "HR"],
    },
    EmotionInfo {
        tag: EmotionTag::Manipulation,
        emoji: "🎭",
        description: "Pretends to care, flatter, or build emotional connection",
        examples: &["Valued customer", "Helping you", "Brother", "Friend"],
    },
    EmotionInfo {
        tag: EmotionTag::Safe,
        emoji: "✅",
        description: "Informational messages with no pressure or forced action",
        examples: &["No links", "No urgency", "Just info", "Verify yourself"],
    },
];

/// Display metadata for every tag, in [`EmotionTag::ALL`] order.
pub fn emotions() -> &'static [EmotionInfo] {
    &EMOTIONS
}

pub fn emotion_info(tag: EmotionTag) -> &'static EmotionInfo {
    match tag {
        EmotionTag::Fear => &EMOTIONS[0],
        EmotionTag::Urgency => &EMOTIONS[1],
        EmotionTag::Greed => &EMOTIONS[2],
        EmotionTag::Authority => &EMOTIONS[3],
        EmotionTag::Manipulation => &EMOTIONS[4],
        EmotionTag::Safe => &EMOTIONS[5],
    }
}

pub(crate) fn questions() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord {
            id: 1,
            category: MessageCategory::Sms,
            sender: "PNB".to_string(),
            body: "PNB Alert: Suspicious activity detected on your account. For your safety, access may be restricted. Check details: https://pnb-secure-login[.]info".to_string(),
            emotions: vec![EmotionTag::Fear, EmotionTag::Authority],
            verdict: Verdict::Trap,
            explanation: "Real banks never send login links via SMS. Fear + authority is used to push you to click before thinking.".to_string(),
            advice: "Never click links in banking SMS. Call your bank's official number or visit the branch.".to_string(),
        },
        QuestionRecord {
            id: 2,
            category: MessageCategory::Sms,
            sender: "Amazon".to_string(),
            body: "Dear valued customer, we tried to process your refund, but need confirmation. Please verify to avoid cancellation.".to_string(),
            emotions: vec![EmotionTag::Manipulation, EmotionTag::Urgency],
            verdict: Verdict::Trap,
            explanation: "Manipulation (\"valued customer\") + urgency is used. Amazon never asks for verification via SMS.".to_string(),
            advice: "Always log in to the official app or call customer care to confirm.".to_string(),
        },
        QuestionRecord {
            id: 3,
            category: MessageCategory::Email,
            sender: "Income Tax Dept".to_string(),
            body: "Subject: Compliance Required. Failure to respond may result in account restrictions. Click to submit details.".to_string(),
            emotions: vec![EmotionTag::Fear, EmotionTag::Authority],
            verdict: Verdict::Trap,
            explanation: "Government departments do not threaten consequences or collect data via email links.".to_string(),
            advice: "Visit official government websites directly by typing the URL yourself.".to_string(),
        },
        QuestionRecord {
            id: 4,
            category: MessageCategory::Sms,
            sender: "Airtel".to_string(),
            body: "Your SIM will be deactivated due to KYC failure. Verify today to avoid service disruption. Click the link below to verify - https://airtel-customarecare.com/".to_string(),
            emotions: vec![EmotionTag::Fear, EmotionTag::Urgency],
            verdict: Verdict::Trap,
            explanation: "Fear and urgency are used. Telecom companies do not deactivate SIMs via SMS links.".to_string(),
            advice: "Visit official stores or call customer care on the number printed on your bill.".to_string(),
        },
        QuestionRecord {
            id: 5,
            category: MessageCategory::WhatsApp,
            sender: "Unknown (+91 98XXX)".to_string(),
            body: "Hey, I'm stuck in a meeting and urgently need ₹8,000. Will return tonight. Please help. - Ankit".to_string(),
            emotions: vec![EmotionTag::Manipulation, EmotionTag::Urgency],
            verdict: Verdict::Trap,
            explanation: "Trust + urgency impersonation scam. Emotional pressure is used to bypass verification.".to_string(),
            advice: "Always call the person on their verified number and ask personal questions only you both would know.".to_string(),
        },
        QuestionRecord {
            id: 6,
            category: MessageCategory::Email,
            sender: "Google".to_string(),
            body: "Security notice: We detected a sign-in from a new device. If this wasn't you, you can ignore this message or visit your account.".to_string(),
            emotions: vec![EmotionTag::Safe],
            verdict: Verdict::Trust,
            explanation: "No link pressure, no urgency, asks you to go to the official account yourself.".to_string(),
            advice: "This is how legitimate security alerts work - informational only.".to_string(),
        },
        QuestionRecord {
            id: 7,
            category: MessageCategory::Sms,
            sender: "BlueDart".to_string(),
            body: "Delivery attempt failed due to an address issue. Update details to reschedule.".to_string(),
            emotions: vec![EmotionTag::Urgency],
            verdict: Verdict::Trap,
            explanation: "Looks routine, but delivery companies ask you to check their official app or tracking ID—not click random links.".to_string(),
            advice: "Open the delivery company's official app and check your tracking number there.".to_string(),
        },
        QuestionRecord {
            id: 8,
            category: MessageCategory::WhatsApp,
            sender: "Investment Group".to_string(),
            body: "Only today! Double your money with our verified investment plan. Limited slots available!".to_string(),
            emotions: vec![EmotionTag::Greed, EmotionTag::Urgency],
            verdict: Verdict::Trap,
            explanation: "Guaranteed returns and deadlines are classic signs of financial scams.".to_string(),
            advice: "Real investments carry risk and are never \"guaranteed\" or time-limited offers.".to_string(),
        },
        QuestionRecord {
            id: 9,
            category: MessageCategory::Sms,
            sender: "PNB".to_string(),
            body: "PNB Alert: We will never ask for your OTP, PIN, or passwords. For any queries, please visit your nearest branch.".to_string(),
            emotions: vec![EmotionTag::Safe],
            verdict: Verdict::Trust,
            explanation: "No action demanded, no link, clear safety reminder.".to_string(),
            advice: "This is how banks educate customers - through awareness messages.".to_string(),
        },
        QuestionRecord {
            id: 10,
            category: MessageCategory::Sms,
            sender: "IRCTC".to_string(),
            body: "IRCTC Update: System maintenance scheduled tonight from 12:00 AM to 2:00 AM. Booking services may be unavailable during this time.".to_string(),
            emotions: vec![EmotionTag::Safe],
            verdict: Verdict::Trust,
            explanation: "Informational only, no action required.".to_string(),
            advice: "Legitimate service updates are informational and don't demand immediate action.".to_string(),
        },
        QuestionRecord {
            id: 11,
            category: MessageCategory::WhatsApp,
            sender: "Crypto Traders".to_string(),
            body: "Only today: double your money with our verified plan. Limited investors only. Act now!".to_string(),
            emotions: vec![EmotionTag::Greed, EmotionTag::Urgency],
            verdict: Verdict::Trap,
            explanation: "Guaranteed returns + urgency is a classic financial scam. No real investment works this way.".to_string(),
            advice: "Block and report such messages. Real investments are never sold like limited-time offers.".to_string(),
        },
        QuestionRecord {
            id: 12,
            category: MessageCategory::Email,
            sender: "LinkedIn Recruiter".to_string(),
            body: "Your profile impressed our client. Share your documents like Aadhar, PAN card to proceed quickly.".to_string(),
            emotions: vec![EmotionTag::Manipulation, EmotionTag::Urgency],
            verdict: Verdict::Trap,
            explanation: "Pressure to act quickly + document sharing without a formal process is unsafe.".to_string(),
            advice: "Legitimate recruiters use official company emails and formal interview processes.".to_string(),
        },
        QuestionRecord {
            id: 13,
            category: MessageCategory::Email,
            sender: "LinkedIn".to_string(),
            body: "You have 3 new profile views this week. Log in to LinkedIn to see who viewed your profile.".to_string(),
            emotions: vec![EmotionTag::Safe],
            verdict: Verdict::Trust,
            explanation: "No external links demanding action, informational nudge only.".to_string(),
            advice: "This is how legitimate services notify you - they direct you to log in yourself.".to_string(),
        },
        QuestionRecord {
            id: 14,
            category: MessageCategory::Sms,
            sender: "Electricity Board".to_string(),
            body: "Final notice: Electricity will be disconnected today due to unpaid bill. Pay immediately to avoid disconnection.".to_string(),
            emotions: vec![EmotionTag::Fear, EmotionTag::Urgency],
            verdict: Verdict::Trap,
            explanation: "Essential services are used to create fear. Always check bills only via official apps or physical bills.".to_string(),
            advice: "Check your official electricity board app or visit the office. They send physical notices first.".to_string(),
        },
        QuestionRecord {
            id: 15,
            category: MessageCategory::Email,
            sender: "HR Department".to_string(),
            body: "Congratulations! You've been selected for a work-from-home position. Pay ₹5,000 registration fee to start immediately.".to_string(),
            emotions: vec![EmotionTag::Greed, EmotionTag::Urgency],
            verdict: Verdict::Trap,
            explanation: "Real jobs never ask for money upfront. This combines fake opportunity with immediate payment demand.".to_string(),
            advice: "Legitimate employers never charge fees. Report and block immediately.".to_string(),
        },    ]
}
